//! Image decoding via the `image` crate
//!
//! Decoded images are converted to 8-bit RGB for analysis. The original color
//! type is kept and reported as a [`PixelFormat`].
//!
//! ## Supported Formats
//!
//! Whatever the enabled `image` crate decoders support: JPEG, PNG, GIF (first
//! frame), WebP, TIFF, BMP, ICO, TGA, PNM, QOI, among others.

use std::path::Path;

use image::{ColorType, DynamicImage, ImageReader, RgbImage};

use crate::raster::grid::{ImageGrid, PixelFormat};
use crate::{Color, ColorError, Result};

/// A decoded image ready for analysis
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: RgbImage,
    format: PixelFormat,
}

impl DecodedImage {
    /// Wrap a decoded `image` crate buffer
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let format = pixel_format_of(image.color());
        Self {
            pixels: image.into_rgb8(),
            format,
        }
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}

impl ImageGrid for DecodedImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from(*self.pixels.get_pixel(x, y))
    }

    fn pixel_format(&self) -> PixelFormat {
        self.format
    }
}

/// Map a decoder color type to the reported pixel format
pub fn pixel_format_of(color_type: ColorType) -> PixelFormat {
    match color_type {
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => PixelFormat::Rgb,
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => PixelFormat::Argb,
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            PixelFormat::Grayscale
        }
        _ => PixelFormat::Other,
    }
}

/// Load and decode an image file
///
/// The format is guessed from the file contents, falling back to the extension.
///
/// # Errors
///
/// Returns `ColorError::InvalidImage` if the file cannot be opened or decoded
///
/// # Example
///
/// ```rust,no_run
/// use colorify::raster::{load_image, ImageGrid};
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.png"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), colorify::ColorError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| {
            ColorError::image_load(format!("Failed to open image file: {}", path.display()), e)
        })?
        .with_guessed_format()
        .map_err(|e| {
            ColorError::image_load(format!("Failed to read image file: {}", path.display()), e)
        })?;

    let image = reader.decode().map_err(|e| {
        ColorError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color_type = ?image.color(),
        "decoded image"
    );

    Ok(DecodedImage::from_dynamic(image))
}

/// Decode an image from an in-memory buffer
///
/// # Errors
///
/// Returns `ColorError::InvalidImage` if `bytes` is empty or cannot be decoded
pub fn load_image_from_memory(bytes: &[u8]) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(ColorError::invalid_image("No image data provided"));
    }

    let image = image::load_from_memory(bytes)
        .map_err(|e| ColorError::image_load("Failed to decode image data", e))?;

    tracing::debug!(
        bytes = bytes.len(),
        width = image.width(),
        height = image.height(),
        "decoded image from memory"
    );

    Ok(DecodedImage::from_dynamic(image))
}
