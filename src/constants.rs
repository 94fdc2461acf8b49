//! Fixed analysis constants
//!
//! These values define the reference behavior of the engine. Outputs are only
//! reproducible across implementations when they are left at these defaults.

/// Dominant color extraction parameters
pub mod extraction {
    /// Channel bucket width used when merging near-duplicate colors
    pub const QUANTIZATION_STEP: u8 = 16;

    /// Default number of dominant colors returned
    pub const DEFAULT_MAX_COLORS: usize = 10;

    /// Target number of sample points along the shorter image side.
    ///
    /// The sampling stride is `max(1, min(width, height) / SAMPLE_GRID)`, which caps
    /// work at roughly `SAMPLE_GRID * SAMPLE_GRID` pixel reads per image.
    pub const SAMPLE_GRID: u32 = 100;
}

/// Palette derivation parameters
pub mod harmony {
    /// Red channel shift between consecutive analogous colors
    pub const ANALOGOUS_SHIFT_STEP: i32 = 30;

    /// Number of analogous colors derived from a base color
    pub const ANALOGOUS_COUNT: usize = 3;
}

/// Naming parameters
pub mod naming {
    /// Label used for any color not in the canonical name table
    pub const FALLBACK_NAME: &str = "Custom Color";
}

/// Largest value of a 24-bit RGB color
pub const MAX_RGB24: u32 = 0xFF_FFFF;
