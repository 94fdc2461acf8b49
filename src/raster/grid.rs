//! Read-only 2-D grids of RGB pixels

use serde::{Deserialize, Serialize};

use crate::{Color, ColorError, Result};

/// Pixel layout reported by the image decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "ARGB")]
    Argb,
    Grayscale,
    Other,
}

impl PixelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Rgb => "RGB",
            PixelFormat::Argb => "ARGB",
            PixelFormat::Grayscale => "Grayscale",
            PixelFormat::Other => "Other",
        }
    }
}

/// A pixel position together with its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

/// Rectangular grid of RGB pixels
///
/// Implementors only have to answer lookups for `x < width()` and
/// `y < height()`; callers check bounds first.
pub trait ImageGrid {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Color at an in-bounds position
    fn color_at(&self, x: u32, y: u32) -> Color;

    /// Pixel layout of the source image
    fn pixel_format(&self) -> PixelFormat {
        PixelFormat::Other
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }
}

impl<G: ImageGrid + ?Sized> ImageGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        (**self).color_at(x, y)
    }

    fn pixel_format(&self) -> PixelFormat {
        (**self).pixel_format()
    }
}

impl ImageGrid for image::RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }

    fn pixel_format(&self) -> PixelFormat {
        PixelFormat::Rgb
    }
}

/// In-memory row-major pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    format: PixelFormat,
}

impl RgbGrid {
    /// Create a grid from row-major pixels
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidImage` if `pixels.len() != width * height`
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ColorError::invalid_image(format!(
                "pixel buffer length {} does not match dimensions {}x{}",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
            format: PixelFormat::Rgb,
        })
    }

    /// Grid of a single color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
            format: PixelFormat::Rgb,
        }
    }

    /// Grid whose pixel at `(x, y)` is `f(x, y)`
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
            format: PixelFormat::Rgb,
        }
    }

    /// Override the reported pixel format
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
}

impl ImageGrid for RgbGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    fn pixel_format(&self) -> PixelFormat {
        self.format
    }
}
