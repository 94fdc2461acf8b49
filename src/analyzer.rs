//! Caller-facing operations
//!
//! [`ColorAnalyzer`] exposes the six operations a transport layer serves:
//! random color, hex validation, RGB to hex conversion, palette generation,
//! dominant color extraction and single-point analysis. Each returns a typed,
//! serializable record.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::{ColorQuantizer, DominantColorExtractor, PixelSampler, RankedColor};
use crate::color::{Color, ColorConverter, ColorRecord, HexString, Palette, PaletteGenerator};
use crate::config::AnalysisConfig;
use crate::constants::MAX_RGB24;
use crate::raster::{self, ImageGrid, ImageInfo};
use crate::{ColorError, Result};

/// Unchecked RGB input as received from a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbInput {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

/// Outcome of validating a hex string; invalid input is reported, not an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexValidation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<HexString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Color>,
    pub message: String,
}

/// Dominant colors of an image together with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    pub colors: Vec<RankedColor>,
    pub image_info: ImageInfo,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Color found at a single pixel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointAnalysis {
    pub hex: HexString,
    pub rgb: Color,
    pub position: Position,
    pub message: String,
}

/// Entry point for all color operations
///
/// Holds no per-call state; one analyzer can serve any number of requests.
#[derive(Debug, Clone)]
pub struct ColorAnalyzer {
    config: AnalysisConfig,
    converter: ColorConverter,
    extractor: DominantColorExtractor,
    palette_generator: PaletteGenerator,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::build(AnalysisConfig::default())
    }
}

impl ColorAnalyzer {
    /// Analyzer with the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` if `config` fails validation
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AnalysisConfig) -> Self {
        let extractor = DominantColorExtractor::new(
            PixelSampler::with_grid(config.sample_grid),
            ColorQuantizer::with_step(config.quantization_step),
            config.max_colors,
        );
        let palette_generator = PaletteGenerator::with_shift_step(config.analogous_shift_step);
        Self {
            config,
            converter: ColorConverter::new(),
            extractor,
            palette_generator,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Uniformly random 24-bit color drawn from `rng`
    pub fn random_color<R: Rng>(&self, rng: &mut R) -> ColorRecord {
        let color = Color::from_rgb24(rng.gen_range(0..=MAX_RGB24));
        ColorRecord::from_color(color)
    }

    /// Validate a hex string, reporting rather than failing on bad input
    pub fn validate_hex(&self, input: &str) -> HexValidation {
        match self.converter.normalize(input) {
            Ok(hex) => HexValidation {
                valid: true,
                rgb: Some(hex.to_color()),
                hex: Some(hex),
                message: "Valid HEX color".to_string(),
            },
            Err(_) => {
                tracing::warn!(input, "rejected hex color");
                HexValidation {
                    valid: false,
                    hex: None,
                    rgb: None,
                    message: "Invalid HEX color format".to_string(),
                }
            }
        }
    }

    /// Convert caller-supplied channels to a color record
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidRgb` if any channel is outside `[0, 255]`
    pub fn convert_rgb_to_hex(&self, rgb: RgbInput) -> Result<ColorRecord> {
        let color = Color::from_channels(rgb.r, rgb.g, rgb.b).inspect_err(|err| {
            tracing::warn!(r = rgb.r, g = rgb.g, b = rgb.b, %err, "rejected rgb input");
        })?;
        Ok(ColorRecord::from_color(color))
    }

    /// Derive the palette of a base hex color
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if `base_hex` is malformed
    pub fn generate_palette(&self, base_hex: &str) -> Result<Palette> {
        self.palette_generator.generate(base_hex).inspect_err(|err| {
            tracing::warn!(input = base_hex, %err, "rejected palette base color");
        })
    }

    /// Rank the dominant colors of a decoded image
    ///
    /// # Arguments
    ///
    /// * `grid` - Decoded image
    /// * `max_colors` - Cap on returned colors; the configured default when `None`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` if `max_colors` is `Some(0)` and
    /// `ColorError::InvalidImage` if the image has a zero dimension
    pub fn extract_dominant_colors<G: ImageGrid + ?Sized>(
        &self,
        grid: &G,
        max_colors: Option<usize>,
    ) -> Result<ExtractionResponse> {
        if max_colors == Some(0) {
            tracing::warn!("rejected zero color cap");
            return Err(ColorError::InvalidParameter {
                parameter: "max_colors".to_string(),
                value: "0".to_string(),
            });
        }

        let image_info = raster::describe(grid);
        if image_info.width == 0 || image_info.height == 0 {
            tracing::warn!(
                width = image_info.width,
                height = image_info.height,
                "rejected empty image"
            );
            return Err(ColorError::invalid_image(format!(
                "image has zero dimension ({}x{})",
                image_info.width, image_info.height
            )));
        }

        let cap = max_colors.unwrap_or(self.extractor.max_colors());
        let colors = self.extractor.extract_top(grid, cap)?;

        Ok(ExtractionResponse {
            colors,
            image_info,
            message: "Colors extracted successfully".to_string(),
        })
    }

    /// Report the color at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::OutOfBounds` if the position is outside the image
    pub fn analyze_point<G: ImageGrid + ?Sized>(
        &self,
        grid: &G,
        x: i64,
        y: i64,
    ) -> Result<PointAnalysis> {
        let color = raster::color_at(grid, x, y).inspect_err(|err| {
            tracing::warn!(%err, "rejected point query");
        })?;
        let position = Position {
            x: x as u32,
            y: y as u32,
        };

        Ok(PointAnalysis {
            hex: self.converter.to_hex(color),
            rgb: color,
            position,
            message: format!("Color extracted at point ({}, {})", x, y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{PixelFormat, RgbGrid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_color_is_deterministic_for_seed() {
        let analyzer = ColorAnalyzer::new();
        let first = analyzer.random_color(&mut StdRng::seed_from_u64(42));
        let second = analyzer.random_color(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_eq!(first.hex.as_str().len(), 7);
        assert_eq!(first.hex.to_color(), first.rgb);
    }

    #[test]
    fn test_random_colors_vary() {
        let analyzer = ColorAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(7);
        let colors: std::collections::HashSet<Color> =
            (0..50).map(|_| analyzer.random_color(&mut rng).rgb).collect();
        assert!(colors.len() > 40);
    }

    #[test]
    fn test_validate_hex_valid() {
        let result = ColorAnalyzer::new().validate_hex("1a2B3c");
        assert!(result.valid);
        assert_eq!(result.hex.unwrap(), "#1A2B3C");
        assert_eq!(result.rgb, Some(Color::new(0x1A, 0x2B, 0x3C)));
        assert_eq!(result.message, "Valid HEX color");
    }

    #[test]
    fn test_validate_hex_invalid() {
        let result = ColorAnalyzer::new().validate_hex("#12");
        assert!(!result.valid);
        assert!(result.hex.is_none());
        assert!(result.rgb.is_none());
        assert_eq!(result.message, "Invalid HEX color format");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": false, "message": "Invalid HEX color format"})
        );
    }

    #[test]
    fn test_convert_rgb_to_hex() {
        let analyzer = ColorAnalyzer::new();
        let record = analyzer
            .convert_rgb_to_hex(RgbInput { r: 255, g: 0, b: 0 })
            .unwrap();
        assert_eq!(record.hex, "#FF0000");
        assert_eq!(record.name, "Red");

        let result = analyzer.convert_rgb_to_hex(RgbInput { r: 300, g: 0, b: 0 });
        assert!(matches!(result, Err(ColorError::InvalidRgb { .. })));
    }

    #[test]
    fn test_rgb_input_from_json() {
        let input: RgbInput = serde_json::from_str(r#"{"r": 300, "g": -2, "b": 7}"#).unwrap();
        assert_eq!(input, RgbInput { r: 300, g: -2, b: 7 });
    }

    #[test]
    fn test_generate_palette() {
        let palette = ColorAnalyzer::new().generate_palette("#000000").unwrap();
        assert_eq!(palette.palette.len(), 5);
        assert_eq!(palette.palette[2].color.hex, "#1E0F00");

        let result = ColorAnalyzer::new().generate_palette("nope");
        assert!(matches!(result, Err(ColorError::InvalidHex { .. })));
    }

    #[test]
    fn test_extract_dominant_colors() {
        let grid = RgbGrid::from_fn(10, 10, |x, _| {
            if x < 3 {
                Color::new(0, 0, 0)
            } else {
                Color::new(255, 255, 255)
            }
        })
        .with_format(PixelFormat::Grayscale);

        let response = ColorAnalyzer::new()
            .extract_dominant_colors(&grid, None)
            .unwrap();

        assert_eq!(response.colors.len(), 2);
        assert_eq!(response.colors[0].color.hex, "#F0F0F0");
        assert_eq!(response.colors[0].percentage, "70.0%");
        assert_eq!(response.colors[1].color.name, "Black");
        assert_eq!(response.image_info.width, 10);
        assert_eq!(response.image_info.pixel_format, PixelFormat::Grayscale);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["imageInfo"]["type"], "Grayscale");
        assert_eq!(json["message"], "Colors extracted successfully");
    }

    #[test]
    fn test_extract_respects_cap() {
        let grid = RgbGrid::from_fn(16, 16, |x, y| Color::new(x as u8 * 16, y as u8 * 16, 0));
        let analyzer = ColorAnalyzer::new();
        assert_eq!(
            analyzer.extract_dominant_colors(&grid, None).unwrap().colors.len(),
            10
        );
        assert_eq!(
            analyzer
                .extract_dominant_colors(&grid, Some(4))
                .unwrap()
                .colors
                .len(),
            4
        );
    }

    #[test]
    fn test_extract_rejects_empty_image() {
        let grid = RgbGrid::filled(0, 0, Color::BLACK);
        let result = ColorAnalyzer::new().extract_dominant_colors(&grid, None);
        assert!(matches!(result, Err(ColorError::InvalidImage { .. })));
    }

    #[test]
    fn test_extract_rejects_zero_cap() {
        let grid = RgbGrid::filled(4, 4, Color::WHITE);
        let result = ColorAnalyzer::new().extract_dominant_colors(&grid, Some(0));
        match result {
            Err(ColorError::InvalidParameter { parameter, value }) => {
                assert_eq!(parameter, "max_colors");
                assert_eq!(value, "0");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_point() {
        let grid = RgbGrid::from_fn(5, 5, |x, y| Color::new(x as u8, y as u8, 200));
        let analysis = ColorAnalyzer::new().analyze_point(&grid, 3, 4).unwrap();

        assert_eq!(analysis.rgb, Color::new(3, 4, 200));
        assert_eq!(analysis.hex, "#0304C8");
        assert_eq!(analysis.position, Position { x: 3, y: 4 });
        assert_eq!(analysis.message, "Color extracted at point (3, 4)");

        let result = ColorAnalyzer::new().analyze_point(&grid, 5, 0);
        assert!(matches!(result, Err(ColorError::OutOfBounds { .. })));
    }

    #[test]
    fn test_custom_config() {
        let config = AnalysisConfig {
            quantization_step: 1,
            max_colors: 2,
            ..AnalysisConfig::default()
        };
        let analyzer = ColorAnalyzer::with_config(config).unwrap();
        let grid = RgbGrid::from_fn(3, 1, |x, _| Color::new(x as u8, 0, 0));
        let response = analyzer.extract_dominant_colors(&grid, None).unwrap();

        assert_eq!(response.colors.len(), 2);
        assert_eq!(response.colors[0].color.rgb, Color::new(0, 0, 0));
        assert_eq!(response.colors[1].color.rgb, Color::new(1, 0, 0));

        let bad = AnalysisConfig {
            max_colors: 0,
            ..AnalysisConfig::default()
        };
        assert!(ColorAnalyzer::with_config(bad).is_err());
    }
}
