//! Canonical color names
//!
//! Naming is an exact, case-insensitive match against a fixed table. Colors
//! outside the table are labelled [`FALLBACK_NAME`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::color::Color;
pub use crate::constants::naming::FALLBACK_NAME;

/// Canonical hex form and display name of every named color
pub const CANONICAL_NAMES: [(&str, &str); 9] = [
    ("#FF0000", "Red"),
    ("#00FF00", "Green"),
    ("#0000FF", "Blue"),
    ("#FFFF00", "Yellow"),
    ("#FF00FF", "Magenta"),
    ("#00FFFF", "Cyan"),
    ("#000000", "Black"),
    ("#FFFFFF", "White"),
    ("#808080", "Gray"),
];

static NAME_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn name_table() -> &'static HashMap<&'static str, &'static str> {
    NAME_TABLE.get_or_init(|| CANONICAL_NAMES.into_iter().collect())
}

/// Resolve the display name of a hex color string
///
/// The lookup uppercases `hex` and matches it exactly, so `"#ff0000"` is
/// "Red" while `"FF0000"` (no `#`) and `"#FE0000"` are both [`FALLBACK_NAME`].
pub fn name_of(hex: &str) -> &'static str {
    name_table()
        .get(hex.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(FALLBACK_NAME)
}

/// Resolve the display name of a color
pub fn name_of_color(color: Color) -> &'static str {
    name_of(color.to_hex().as_str())
}
