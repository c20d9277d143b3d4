use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use image::Rgb;

use super::error::QRError;

// Color
//------------------------------------------------------------------------------

/// A 24-bit RGB color, written as a hex string such as `#1a2b3c`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);

    pub const fn rgb(self) -> Rgb<u8> {
        Rgb([self.0, self.1, self.2])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self(r, g, b)
    }
}

impl FromStr for Color {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QRError::InvalidColor(s.to_string());

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            // Shorthand #rgb expands each digit, e.g. #f80 -> #ff8800
            3 => {
                let digit = |i: usize| channel(&hex[i..i + 1]).map(|d| d * 17);
                Ok(Self(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// Palette
//------------------------------------------------------------------------------

/// Foreground (dark module) and background (light module) colors.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
}

impl Palette {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub const fn select(&self, dark: bool) -> Color {
        if dark {
            self.fg
        } else {
            self.bg
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { fg: Color::BLACK, bg: Color::WHITE }
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{} on {}", self.fg, self.bg)
    }
}
