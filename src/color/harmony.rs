//! Palette derivation: complementary and analogous colors
//!
//! The analogous transform shifts red by the full step, green by half of it
//! and blue down by a third (integer division), clamping every channel to
//! `[0, 255]`.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorConverter, ColorRecord, HexString};
use crate::constants::harmony::{ANALOGOUS_COUNT, ANALOGOUS_SHIFT_STEP};
use crate::Result;

/// How a palette color relates to the base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Base,
    Complementary,
    Analogous,
}

/// One palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    #[serde(flatten)]
    pub color: ColorRecord,
    pub relation: Relation,
}

/// Palette derived from a base color
///
/// Entries are in generation order: the base color, its complement, then the
/// analogous colors by increasing shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub base_color: HexString,
    pub palette: Vec<PaletteColor>,
}

impl Palette {
    pub fn complementary(&self) -> Option<&PaletteColor> {
        self.palette
            .iter()
            .find(|entry| entry.relation == Relation::Complementary)
    }

    pub fn analogous(&self) -> impl Iterator<Item = &PaletteColor> {
        self.palette
            .iter()
            .filter(|entry| entry.relation == Relation::Analogous)
    }
}

/// Generator for complementary and analogous colors
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    converter: ColorConverter,
    shift_step: i32,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    /// Create a generator with the reference shift step of 30
    pub fn new() -> Self {
        Self::with_shift_step(ANALOGOUS_SHIFT_STEP)
    }

    pub fn with_shift_step(shift_step: i32) -> Self {
        Self {
            converter: ColorConverter::new(),
            shift_step,
        }
    }

    /// Channel-wise inversion `(255 - r, 255 - g, 255 - b)`
    pub fn complement(&self, color: Color) -> Color {
        Color::new(255 - color.r, 255 - color.g, 255 - color.b)
    }

    /// Derive the analogous colors of `color`, smallest shift first
    ///
    /// For `i` in `1..=3`, `shift = step * i` and the result is
    /// `(r + shift, g + shift / 2, b - shift / 3)` clamped to `[0, 255]`.
    pub fn analogous(&self, color: Color) -> [Color; ANALOGOUS_COUNT] {
        std::array::from_fn(|index| {
            let shift = self.shift_step * (index as i32 + 1);
            Color::new(
                shift_channel(color.r, shift),
                shift_channel(color.g, shift / 2),
                shift_channel(color.b, -(shift / 3)),
            )
        })
    }

    /// Build the full palette for a hex color
    ///
    /// # Arguments
    ///
    /// * `hex` - Base color, with or without `#`, any case
    ///
    /// # Returns
    ///
    /// `Palette` with the base color, its complement and three analogous colors,
    /// each named
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if `hex` is malformed
    pub fn generate(&self, hex: &str) -> Result<Palette> {
        let base_color = self.converter.normalize(hex)?;
        let base = base_color.to_color();

        let mut palette = Vec::with_capacity(2 + ANALOGOUS_COUNT);
        palette.push(entry(base, Relation::Base));
        palette.push(entry(self.complement(base), Relation::Complementary));
        palette.extend(
            self.analogous(base)
                .into_iter()
                .map(|color| entry(color, Relation::Analogous)),
        );

        tracing::trace!(base = %base_color, entries = palette.len(), "generated palette");

        Ok(Palette {
            base_color,
            palette,
        })
    }
}

fn shift_channel(value: u8, delta: i32) -> u8 {
    (i32::from(value) + delta).clamp(0, 255) as u8
}

fn entry(color: Color, relation: Relation) -> PaletteColor {
    PaletteColor {
        color: ColorRecord::from_color(color),
        relation,
    }
}
