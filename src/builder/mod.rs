mod logo;
mod qr;

pub use logo::{decode_logo, overlay_logo, LogoRegion};
pub use qr::QR;

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use qrcode::{types::QrError, QrCode, Version};
use tracing::debug;

use crate::common::{ECLevel, Palette, QRError, QRResult, Style, MAX_VERSION};

pub struct QRBuilder<'a> {
    data: &'a str,
    style: Style,
    logo: Option<&'a [u8]>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, style: Style::default(), logo: None }
    }

    pub fn style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.style.palette = palette;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.style.ec_level = ec_level;
        self
    }

    pub fn module_size(&mut self, module_size: u32) -> &mut Self {
        self.style.module_size = module_size;
        self
    }

    pub fn quiet_zone(&mut self, quiet_zone: u32) -> &mut Self {
        self.style.quiet_zone = quiet_zone;
        self
    }

    pub fn min_version(&mut self, min_version: u8) -> &mut Self {
        self.style.min_version = min_version;
        self
    }

    /// Encoded logo image (PNG, JPEG, ...) to place at the center.
    pub fn logo(&mut self, logo: &'a [u8]) -> &mut Self {
        self.logo = Some(logo);
        self
    }

    pub fn unset_logo(&mut self) -> &mut Self {
        self.logo = None;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Style: {}, Logo: {} }}", self.style, self.logo.is_some())
    }
}

// Build
//------------------------------------------------------------------------------

impl QRBuilder<'_> {
    /// Fits the payload into the smallest version starting at `min_version`.
    ///
    /// The returned symbol is guaranteed to render within `MAX_IMAGE_SIZE`.
    pub fn symbol(&self) -> QRResult<QR> {
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }
        self.style.validate()?;

        let ecl = self.style.ec_level;
        for ver in self.style.min_version..=MAX_VERSION {
            match QrCode::with_version(self.data, Version::Normal(ver as i16), ecl.into()) {
                Ok(code) => {
                    debug!(version = ver, width = code.width(), "Fitted payload");
                    self.style.image_size(code.width())?;
                    return Ok(QR::from_code(&code, ver, ecl));
                }
                Err(QrError::DataTooLong) => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(QRError::DataTooLong)
    }

    /// Fits the payload and renders it, see [`QRBuilder::render`].
    pub fn build(&self) -> QRResult<RgbImage> {
        let qr = self.symbol()?;
        self.render(&qr)
    }

    /// Renders `qr` with the configured palette and composites the logo, if any.
    pub fn render(&self, qr: &QR) -> QRResult<RgbImage> {
        let logo = self.logo.map(decode_logo).transpose()?;

        let mut img = qr.render(&self.style)?;
        debug!(size = img.width(), palette = %self.style.palette, "Rendered symbol");

        if let Some(logo) = logo {
            overlay_logo(&mut img, &logo);
        }
        Ok(img)
    }
}

/// Encodes `data` with `style`, placing the optional encoded `logo` at the center.
pub fn generate_qr_code(data: &str, style: Style, logo: Option<&[u8]>) -> QRResult<RgbImage> {
    let mut builder = QRBuilder::new(data);
    builder.style(style);
    if let Some(logo) = logo {
        builder.logo(logo);
    }
    builder.build()
}

pub fn encode_png(img: &RgbImage) -> QRResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).map_err(QRError::ImageEncode)?;
    Ok(buf.into_inner())
}
