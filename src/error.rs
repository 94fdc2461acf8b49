//! Error types for the colorify library

use thiserror::Error;

/// Result type alias for colorify operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error kinds surfaced by color validation, conversion and image analysis
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex string is empty, has the wrong length or contains non-hex characters
    #[error("Invalid hex color: {input:?}")]
    InvalidHex { input: String },

    /// RGB channel outside the 0-255 range
    #[error("Invalid RGB value: {channel} = {value} (must be between 0 and 255)")]
    InvalidRgb { channel: char, value: i64 },

    /// Image could not be decoded or has a zero dimension
    #[error("Invalid image: {message}")]
    InvalidImage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Pixel coordinates fall outside the image grid
    #[error("Coordinates ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Sampling produced no pixels
    #[error("Image produced no pixel samples")]
    EmptyImage,

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an image decoding error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidImage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image error without an underlying cause
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the error was caused by caller input rather than by the image itself
    ///
    /// Input errors can be fixed by resubmitting different values; image errors
    /// need a different image.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHex { .. }
                | ColorError::InvalidRgb { .. }
                | ColorError::OutOfBounds { .. }
                | ColorError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHex { .. } => "Invalid HEX color format".to_string(),
            ColorError::InvalidRgb { .. } => {
                "Invalid RGB values: RGB values must be between 0 and 255".to_string()
            }
            ColorError::InvalidImage { .. } => "Invalid image format".to_string(),
            ColorError::OutOfBounds { .. } => "Coordinates out of image bounds".to_string(),
            ColorError::EmptyImage => "No image data provided".to_string(),
            ColorError::InvalidParameter { parameter, .. } => {
                format!("Invalid configuration value for {}", parameter)
            }
            ColorError::ConfigError { .. } => "Could not load configuration".to_string(),
        }
    }
}
