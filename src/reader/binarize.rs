use std::borrow::Cow;

use image::{imageops, GrayImage, Luma};
use imageproc::contrast::otsu_level;

// Detection passes
//------------------------------------------------------------------------------

/// Preprocessing applied to the luminance image before a detection attempt.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Pass {
    /// Luminance as decoded
    Raw,
    /// Global Otsu threshold, for palettes with little contrast
    Otsu,
    /// Inverted luminance, for light modules on a dark background
    Inverted,
}

impl Pass {
    pub const ALL: [Pass; 3] = [Pass::Raw, Pass::Otsu, Pass::Inverted];

    pub fn apply(self, img: &GrayImage) -> Cow<'_, GrayImage> {
        match self {
            Self::Raw => Cow::Borrowed(img),
            Self::Otsu => Cow::Owned(binarize(img)),
            Self::Inverted => {
                let mut inv = img.clone();
                imageops::invert(&mut inv);
                Cow::Owned(inv)
            }
        }
    }
}

pub fn binarize(img: &GrayImage) -> GrayImage {
    let level = otsu_level(img);
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y).0[0] > level {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
mod binarize_tests {
    use image::{GrayImage, Luma};

    use super::{binarize, Pass};

    fn two_tone() -> GrayImage {
        GrayImage::from_fn(8, 8, |x, _| if x < 4 { Luma([90]) } else { Luma([140]) })
    }

    #[test]
    fn test_binarize_splits_two_tones() {
        let bin = binarize(&two_tone());
        for (x, _, px) in bin.enumerate_pixels() {
            let exp = if x < 4 { 0 } else { 255 };
            assert_eq!(px.0[0], exp);
        }
    }

    #[test]
    fn test_raw_pass_borrows() {
        let img = two_tone();
        assert!(matches!(Pass::Raw.apply(&img), std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn test_inverted_pass() {
        let img = two_tone();
        let inv = Pass::Inverted.apply(&img);
        assert_eq!(inv.get_pixel(0, 0).0[0], 165);
        assert_eq!(inv.get_pixel(7, 0).0[0], 115);
    }
}
