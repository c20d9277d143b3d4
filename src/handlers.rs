//! Stateless entry points for the three user actions.
//!
//! Each handler takes everything it needs by value or by reference and keeps
//! nothing between calls, so any host (CLI, web server, GUI event loop) can
//! call them independently.

use image::RgbImage;
use tracing::info;

use crate::batch::{read_rows, run_batch, BatchOutput};
use crate::builder::{encode_png, QRBuilder, QR};
use crate::common::{QRResult, Style};
use crate::reader::{scan, ScanResult};

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub text: String,
    pub style: Style,
    /// Encoded logo image, if one was uploaded
    pub logo: Option<Vec<u8>>,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style, logo: None }
    }

    pub fn with_logo(mut self, logo: Vec<u8>) -> Self {
        self.logo = Some(logo);
        self
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Fitted module grid that `image` was rendered from
    pub symbol: QR,
    pub image: RgbImage,
    /// PNG encoding of `image`, ready for download
    pub png: Vec<u8>,
}

/// "Generate one QR code".
pub fn generate(req: GenerateRequest) -> QRResult<GeneratedImage> {
    let mut builder = QRBuilder::new(&req.text);
    builder.style(req.style);
    if let Some(logo) = req.logo.as_deref() {
        builder.logo(logo);
    }

    let symbol = builder.symbol()?;
    let image = builder.render(&symbol)?;
    let png = encode_png(&image)?;
    info!(size = image.width(), png_len = png.len(), "QR code generated");
    Ok(GeneratedImage { symbol, image, png })
}

/// "Generate batch" from the bytes of an uploaded CSV file.
pub fn generate_batch(table: &[u8], style: Style) -> QRResult<BatchOutput> {
    let rows = read_rows(table)?;
    info!(rows = rows.len(), "Generating batch...");
    run_batch(rows, style)
}

/// "Scan one image" from the bytes of an uploaded image file.
pub fn scan_image(bytes: &[u8]) -> QRResult<ScanResult> {
    scan(bytes)
}
