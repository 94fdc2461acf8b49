//! Hex and RGB conversion utilities
//!
//! Accepted hex input is six hexadecimal digits in any case, optionally
//! prefixed with a single `#`. Output is always the canonical `#RRGGBB`
//! uppercase form.

use crate::{color::Color, color::HexString, ColorError, Result};

/// Number of hex digits in a 24-bit color
const HEX_DIGITS: usize = 6;

/// Converter between hex strings and RGB colors
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Check whether `input` is a well-formed hex color
    ///
    /// True iff, after stripping one optional leading `#`, the remainder is
    /// exactly six hexadecimal digits (case-insensitive). Empty input is invalid.
    pub fn validate(&self, input: &str) -> bool {
        let digits = strip_hash(input);
        digits.len() == HEX_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Normalize a hex color to canonical form
    ///
    /// # Arguments
    ///
    /// * `input` - Hex color string (e.g., "1a2B3c" or "#1A2B3C")
    ///
    /// # Returns
    ///
    /// Canonical hex string (e.g., "#1A2B3C")
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if `input` fails [`validate`](Self::validate)
    pub fn normalize(&self, input: &str) -> Result<HexString> {
        if !self.validate(input) {
            return Err(invalid_hex(input));
        }
        let canonical = format!("#{}", strip_hash(input).to_ascii_uppercase());
        Ok(HexString::from_canonical(canonical))
    }

    /// Parse hexadecimal color string to RGB channels
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if `hex` is not a valid hex color
    pub fn to_rgb(&self, hex: &str) -> Result<Color> {
        if !self.validate(hex) {
            return Err(invalid_hex(hex));
        }
        let digits = strip_hash(hex);
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid_hex(hex))
        };
        Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format a color as a zero-padded uppercase hex string
    pub fn to_hex(&self, color: Color) -> HexString {
        HexString::from_canonical(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }
}

fn strip_hash(input: &str) -> &str {
    input.strip_prefix('#').unwrap_or(input)
}

fn invalid_hex(input: &str) -> ColorError {
    ColorError::InvalidHex {
        input: input.to_string(),
    }
}
