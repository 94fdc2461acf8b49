//! Single-pixel lookup and image metadata

use serde::{Deserialize, Serialize};

use crate::raster::grid::{ImageGrid, PixelFormat};
use crate::{Color, ColorError, Result};

/// Dimensions and pixel layout of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub pixel_format: PixelFormat,
}

/// Look up the color at `(x, y)`
///
/// # Errors
///
/// Returns `ColorError::OutOfBounds` if `x` or `y` is negative or not less than
/// the respective dimension
pub fn color_at<G: ImageGrid + ?Sized>(grid: &G, x: i64, y: i64) -> Result<Color> {
    if !grid.contains(x, y) {
        return Err(ColorError::OutOfBounds {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        });
    }
    // contains() guarantees both fit in u32
    Ok(grid.color_at(x as u32, y as u32))
}

/// Report the grid dimensions and the decoder's pixel format
pub fn describe<G: ImageGrid + ?Sized>(grid: &G) -> ImageInfo {
    ImageInfo {
        width: grid.width(),
        height: grid.height(),
        pixel_format: grid.pixel_format(),
    }
}

/// Map a pointer position on a resized view back to image coordinates
///
/// Each axis is scaled by `image / display` and truncated toward zero. The
/// result is not bounds-checked; pass it to [`color_at`].
///
/// # Arguments
///
/// * `display` - `(width, height)` of the view the image is drawn into
/// * `image` - `(width, height)` of the source image
/// * `x`, `y` - Pointer position within the view
pub fn map_display_point(display: (u32, u32), image: (u32, u32), x: i64, y: i64) -> (i64, i64) {
    let scale = |pos: i64, display: u32, image: u32| {
        if display == 0 {
            return pos;
        }
        (pos as f64 * f64::from(image) / f64::from(display)) as i64
    };
    (scale(x, display.0, image.0), scale(y, display.1, image.1))
}
