mod binarize;
mod text;

pub use binarize::{binarize, Pass};
pub use text::decode_text;

use std::fmt::{Display, Error, Formatter};

use image::{DynamicImage, GrayImage};
use rqrr::PreparedImage;
use tracing::{debug, info, warn};

use crate::common::{QRError, QRResult};

pub const NOT_FOUND_MSG: &str = "No QR Code detected.";

// Scan result
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ScanResult {
    Found(String),
    NotFound,
}

impl ScanResult {
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Found(msg) => Some(msg),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl Display for ScanResult {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.payload().unwrap_or(NOT_FOUND_MSG))
    }
}

// Reader
//------------------------------------------------------------------------------

/// Decodes encoded image bytes and looks for one QR code.
///
/// Bytes that are not a readable image fail with [`QRError::ImageDecode`]; a
/// readable image without a code is [`ScanResult::NotFound`].
pub fn scan(bytes: &[u8]) -> QRResult<ScanResult> {
    debug!(len = bytes.len(), "Decoding image...");
    let img = image::load_from_memory(bytes).map_err(QRError::ImageDecode)?;
    Ok(scan_image(&img))
}

pub fn scan_image(img: &DynamicImage) -> ScanResult {
    let gray = img.to_luma8();
    debug!(w = gray.width(), h = gray.height(), "Scanning image...");

    for pass in Pass::ALL {
        debug!(?pass, "Running detection pass...");
        if let Some(msg) = detect(&pass.apply(&gray)) {
            info!(?pass, len = msg.len(), "QR code decoded");
            return ScanResult::Found(msg);
        }
    }

    warn!("No QR code detected");
    ScanResult::NotFound
}

fn detect(gray: &GrayImage) -> Option<String> {
    let (w, h) = gray.dimensions();
    let mut img = PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
        gray.get_pixel(x as u32, y as u32).0[0]
    });

    let grids = img.detect_grids();
    debug!(count = grids.len(), "Located grids");

    for grid in grids {
        let mut buf = Vec::new();
        match grid.decode_to(&mut buf) {
            Ok(meta) => {
                debug!(version = meta.version.0, ecc_level = meta.ecc_level, "Grid decoded");
                let msg = decode_text(buf);
                if !msg.is_empty() {
                    return Some(msg);
                }
            }
            Err(e) => debug!(error = ?e, "Grid could not be decoded"),
        }
    }
    None
}
