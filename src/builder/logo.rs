use image::{imageops, imageops::FilterType, DynamicImage, RgbImage};
use tracing::debug;

use crate::common::{QRError, QRResult};

// Logo placement
//------------------------------------------------------------------------------

/// Area of the QR image covered by the logo.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct LogoRegion {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl LogoRegion {
    /// Quarter-width, quarter-height box centered in a `img_w` x `img_h` image.
    pub fn centered(img_w: u32, img_h: u32) -> Self {
        let (w, h) = (img_w / 4, img_h / 4);
        Self { x: (img_w - w) / 2, y: (img_h - h) / 2, w, h }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.x <= x && x < self.x + self.w && self.y <= y && y < self.y + self.h
    }
}

pub fn decode_logo(bytes: &[u8]) -> QRResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(QRError::LogoDecode)
}

// Compositing
//------------------------------------------------------------------------------

/// Resizes `logo` into the centered region of `canvas` and pastes it.
///
/// Logos with an alpha channel are blended using that channel as the mask, so
/// transparent pixels keep the modules underneath. Logos without alpha replace
/// the covered region.
pub fn overlay_logo(canvas: &mut RgbImage, logo: &DynamicImage) -> LogoRegion {
    let region = LogoRegion::centered(canvas.width(), canvas.height());
    if region.w == 0 || region.h == 0 {
        return region;
    }

    let resized = logo.resize_exact(region.w, region.h, FilterType::CatmullRom);
    let has_alpha = logo.color().has_alpha();
    debug!(?region, has_alpha, "Compositing logo");

    if has_alpha {
        blend(canvas, &resized, region);
    } else {
        imageops::replace(canvas, &resized.to_rgb8(), region.x as i64, region.y as i64);
    }
    region
}

fn blend(canvas: &mut RgbImage, logo: &DynamicImage, region: LogoRegion) {
    let logo = logo.to_rgba8();
    for (dx, dy, px) in logo.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let dst = canvas.get_pixel_mut(region.x + dx, region.y + dy);
        for (d, s) in dst.0.iter_mut().zip([r, g, b]) {
            *d = mix(s, *d, a);
        }
    }
}

fn mix(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u16;
    ((src as u16 * a + dst as u16 * (255 - a) + 127) / 255) as u8
}
