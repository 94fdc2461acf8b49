//! Color values, hex conversion, naming and palette derivation
//!
//! This module holds the color value types shared by the whole crate and the
//! deterministic transforms applied to them.

pub mod conversion;
pub mod harmony;
pub mod naming;

pub use conversion::ColorConverter;
pub use harmony::{Palette, PaletteColor, PaletteGenerator, Relation};
pub use naming::{name_of, name_of_color};

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{constants::MAX_RGB24, ColorError, Result};

/// 8-bit RGB color
///
/// Channels are `u8`, so every value of this type is in range by construction.
/// Arithmetic that can leave `[0, 255]` goes through `i32` and clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from in-range channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from unchecked integer channels
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidRgb` naming the first channel outside `[0, 255]`.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let check = |channel: char, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::InvalidRgb { channel, value })
        };
        Ok(Self::new(check('r', r)?, check('g', g)?, check('b', b)?))
    }

    /// Create a color from a packed `0xRRGGBB` value; bits above 24 are ignored
    pub const fn from_rgb24(value: u32) -> Self {
        let value = value & MAX_RGB24;
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Pack the color into a `0xRRGGBB` value
    pub const fn to_rgb24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Canonical `#RRGGBB` form of this color
    pub fn to_hex(self) -> HexString {
        ColorConverter::new().to_hex(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::new(r, g, b)
    }
}

/// Canonical hex color string: `#` followed by six uppercase hex digits
///
/// A `HexString` can only be obtained through validation, so holding one
/// guarantees the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexString(String);

impl HexString {
    /// Wrap a string already known to be canonical
    pub(crate) fn from_canonical(value: String) -> Self {
        debug_assert_eq!(value.len(), 7);
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into channels
    pub fn to_color(&self) -> Color {
        let digits = &self.0[1..];
        let value = u32::from_str_radix(digits, 16).unwrap_or_default();
        Color::from_rgb24(value)
    }
}

impl FromStr for HexString {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        ColorConverter::new().normalize(s)
    }
}

impl TryFrom<String> for HexString {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexString> for String {
    fn from(hex: HexString) -> Self {
        hex.0
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for HexString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A color as presented to callers: hex form, channels and resolved name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub hex: HexString,
    pub rgb: Color,
    pub name: String,
}

impl ColorRecord {
    pub fn from_color(color: Color) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color,
            name: name_of_color(color).to_string(),
        }
    }
}

impl From<Color> for ColorRecord {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}
