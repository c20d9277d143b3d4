use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use super::error::{QRError, QRResult};
use super::palette::Palette;

pub const MIN_VERSION: u8 = 1;
pub const MAX_VERSION: u8 = 40;
/// Largest side length in pixels of a rendered image, quiet zone included.
pub const MAX_IMAGE_SIZE: u32 = 8192;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum ECLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let lvl = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(lvl)
    }
}

// Style
//------------------------------------------------------------------------------

/// Rendering configuration shared by single and batch generation.
///
/// A `Style` is plain data and is handed to every pipeline call by value, so two
/// requests never observe each other's settings.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Style {
    pub palette: Palette,
    pub ec_level: ECLevel,
    /// Pixels per module
    pub module_size: u32,
    /// Border width in modules
    pub quiet_zone: u32,
    /// Smallest version tried when fitting the payload
    pub min_version: u8,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            ec_level: ECLevel::M,
            module_size: 10,
            quiet_zone: 5,
            min_version: MIN_VERSION,
        }
    }
}

impl Style {
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> QRResult<()> {
        if self.module_size == 0 {
            return Err(QRError::InvalidModuleSize);
        }
        if !(MIN_VERSION..=MAX_VERSION).contains(&self.min_version) {
            return Err(QRError::InvalidVersion(self.min_version));
        }
        let min_width = self.min_version as usize * 4 + 17;
        self.image_size(min_width).map(|_| ())
    }

    /// Side length in pixels of a symbol of `width` modules rendered with this style.
    pub fn image_size(&self, width: usize) -> QRResult<u32> {
        let width = u32::try_from(width).map_err(|_| QRError::ImageTooLarge)?;
        self.quiet_zone
            .checked_mul(2)
            .and_then(|qz| qz.checked_add(width))
            .and_then(|modules| modules.checked_mul(self.module_size))
            .filter(|&sz| sz <= MAX_IMAGE_SIZE)
            .ok_or(QRError::ImageTooLarge)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "{{ Palette: {}, Ec level: {}, Module size: {}, Quiet zone: {}, Min version: {} }}",
            self.palette, self.ec_level, self.module_size, self.quiet_zone, self.min_version
        )
    }
}
