//! # Colorify
//!
//! A Rust crate for color analysis of raster images and hex color palettes.
//!
//! This library provides:
//! - Dominant color extraction through strided sampling, quantization and
//!   frequency ranking
//! - Single-pixel color lookup with bounds checking
//! - Hex validation, normalization and RGB conversion
//! - Complementary and analogous palette derivation with canonical color names
//!
//! All operations are synchronous and deterministic. Image decoding is
//! delegated to the `image` crate; the analysis core only reads pixels through
//! the [`ImageGrid`] trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use colorify::analyze_image;
//! use std::path::Path;
//!
//! let result = analyze_image(Path::new("photo.png"))?;
//! for color in &result.colors {
//!     println!("{} {} ({})", color.color.hex, color.percentage, color.color.name);
//! }
//! # Ok::<(), colorify::ColorError>(())
//! ```
//!
//! ```rust
//! use colorify::ColorAnalyzer;
//!
//! let palette = ColorAnalyzer::new().generate_palette("#000000")?;
//! assert_eq!(palette.palette[1].color.hex, "#FFFFFF");
//! # Ok::<(), colorify::ColorError>(())
//! ```

use std::path::Path;

pub mod analysis;
pub mod analyzer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod raster;

pub use analysis::RankedColor;
pub use analyzer::{
    ColorAnalyzer, ExtractionResponse, HexValidation, PointAnalysis, Position, RgbInput,
};
pub use color::{Color, ColorConverter, ColorRecord, HexString, Palette, PaletteColor, Relation};
pub use config::AnalysisConfig;
pub use error::{ColorError, Result};
pub use raster::{ImageGrid, ImageInfo, Pixel, PixelFormat, RgbGrid};

/// Extract the dominant colors of an image file
///
/// This is the main entry point for image analysis. It decodes the file and
/// ranks up to ten dominant colors using the reference configuration.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
///
/// # Returns
///
/// An `ExtractionResponse` with the ranked colors and the image metadata
///
/// # Errors
///
/// Returns `ColorError` if:
/// - The image cannot be opened or decoded
/// - The image has a zero dimension
pub fn analyze_image(image_path: &Path) -> Result<ExtractionResponse> {
    let image = raster::load_image(image_path)?;
    ColorAnalyzer::new().extract_dominant_colors(&image, None)
}
