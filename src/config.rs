//! Configuration for the colorify analysis engine.
//!
//! Every parameter defaults to the reference constant in [`crate::constants`];
//! outputs only match the reference behavior when the defaults are used.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use colorify::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("colorify.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), colorify::ColorError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{extraction, harmony};
use crate::{ColorError, Result};

/// Tunable parameters for extraction and palette derivation.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Bucket width per channel when merging similar colors
    pub quantization_step: u8,

    /// Number of dominant colors returned when the caller gives no cap
    pub max_colors: usize,

    /// Red channel shift between consecutive analogous colors
    pub analogous_shift_step: i32,

    /// Target number of samples along the shorter image side
    pub sample_grid: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            quantization_step: extraction::QUANTIZATION_STEP,
            max_colors: extraction::DEFAULT_MAX_COLORS,
            analogous_shift_step: harmony::ANALOGOUS_SHIFT_STEP,
            sample_grid: extraction::SAMPLE_GRID,
        }
    }
}

impl AnalysisConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` for the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.quantization_step == 0 {
            return Err(invalid("quantization_step", self.quantization_step));
        }
        if self.max_colors == 0 {
            return Err(invalid("max_colors", self.max_colors));
        }
        if !(0..=255).contains(&self.analogous_shift_step) {
            return Err(invalid("analogous_shift_step", self.analogous_shift_step));
        }
        if self.sample_grid == 0 {
            return Err(invalid("sample_grid", self.sample_grid));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ColorError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ColorError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

fn invalid(parameter: &str, value: impl ToString) -> ColorError {
    ColorError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = AnalysisConfig::default();
        assert_eq!(config.quantization_step, 16);
        assert_eq!(config.max_colors, 10);
        assert_eq!(config.analogous_shift_step, 30);
        assert_eq!(config.sample_grid, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let config = AnalysisConfig {
            quantization_step: 0,
            ..AnalysisConfig::default()
        };
        match config.validate() {
            Err(ColorError::InvalidParameter { parameter, value }) => {
                assert_eq!(parameter, "quantization_step");
                assert_eq!(value, "0");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }

        let config = AnalysisConfig {
            analogous_shift_step: -5,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AnalysisConfig {
            sample_grid: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"max_colors": 5}"#).unwrap();
        assert_eq!(config.max_colors, 5);
        assert_eq!(config.quantization_step, 16);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "colorify_config_test_{}.json",
            std::process::id()
        ));
        let config = AnalysisConfig {
            max_colors: 4,
            ..AnalysisConfig::default()
        };

        config.to_json_file(&path).unwrap();
        let loaded = AnalysisConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let result = AnalysisConfig::from_json_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ColorError::ConfigError { .. })));
    }
}
