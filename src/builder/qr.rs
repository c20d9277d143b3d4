use image::RgbImage;

use crate::common::{ECLevel, QRResult, Style};

// QR symbol
//------------------------------------------------------------------------------

/// The module grid of a fitted QR code, before any styling is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<bool>,
    w: usize,
    ver: u8,
    ecl: ECLevel,
}

impl QR {
    pub(crate) fn from_code(code: &qrcode::QrCode, ver: u8, ecl: ECLevel) -> Self {
        let w = code.width();
        let grid = code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect();
        Self { grid, w, ver, ecl }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn version(&self) -> u8 {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn is_dark(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.w && c < self.w, "Module out of bounds: {r} {c}");
        self.grid[r * self.w + c]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&d| d).count()
    }

    /// Side length in pixels of the image produced by [`QR::render`].
    pub fn image_size(&self, style: &Style) -> QRResult<u32> {
        style.image_size(self.w)
    }

    /// Pixel at the center of module `(r, c)` in the rendered image.
    pub fn module_center(&self, r: usize, c: usize, style: &Style) -> (u32, u32) {
        let ms = style.module_size;
        let x = (style.quiet_zone + c as u32) * ms + ms / 2;
        let y = (style.quiet_zone + r as u32) * ms + ms / 2;
        (x, y)
    }

    pub fn metadata(&self) -> String {
        format!("{{ Version: {}, Ec level: {}, Width: {} }}", self.ver, self.ecl, self.w)
    }
}

// Render
//------------------------------------------------------------------------------

impl QR {
    /// Fails with `ImageTooLarge` when the style would exceed `MAX_IMAGE_SIZE`.
    pub fn render(&self, style: &Style) -> QRResult<RgbImage> {
        let total_sz = self.image_size(style)?;
        let Style { palette, module_size: module_sz, quiet_zone, .. } = *style;
        // Both terms are bounded by total_sz
        let qz_sz = quiet_zone * module_sz;
        let qr_sz = self.w as u32 * module_sz;

        let img = RgbImage::from_fn(total_sz, total_sz, |x, y| {
            if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
                return palette.bg.rgb();
            }
            let r = ((y - qz_sz) / module_sz) as usize;
            let c = ((x - qz_sz) / module_sz) as usize;
            palette.select(self.is_dark(r, c)).rgb()
        });
        Ok(img)
    }

    /// Text preview for dark terminals: light modules are drawn as blocks.
    pub fn to_str(&self, module_sz: usize, quiet_zone: usize) -> String {
        let qz_sz = quiet_zone * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (2 * total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                let dark = if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    false
                } else {
                    self.is_dark((i - qz_sz) / module_sz, (j - qz_sz) / module_sz)
                };
                // Two columns per module keep the symbol roughly square
                canvas.push_str(if dark { "  " } else { "██" });
            }
            canvas.push('\n');
        }

        canvas
    }
}
