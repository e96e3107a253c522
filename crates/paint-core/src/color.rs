//! Hex body colors.
//!
//! Colors are accepted only as `#rrggbb` (either case) and are stored as three
//! bytes, so every [`HexColor`] is valid by construction and displays in
//! lowercase.

use crate::error::{ConfigError, Field, Result};
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    rgb: [u8; 3],
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Parse `#rrggbb`. Shorthand (`#fff`), missing `#`, named colors and
    /// `rgb()` syntax are all rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || ConfigError::invalid(Field::Color, s);
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn rgb(self) -> [u8; 3] {
        self.rgb
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Normalized sRGB components in [0, 1].
    pub fn to_srgb(self) -> Vec3 {
        let [r, g, b] = self.rgb;
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }

    /// Linear-light components, which is what shading math consumes.
    pub fn to_linear(self) -> Vec3 {
        let c = self.to_srgb();
        Vec3::new(srgb_to_linear(c.x), srgb_to_linear(c.y), srgb_to_linear(c.z))
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
