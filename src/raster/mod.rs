//! Image grid abstraction and the operations that read through it
//!
//! The analysis core never decodes image bytes. It reads pixels through the
//! [`ImageGrid`] trait; [`loader`] adapts decoded `image` crate buffers to it.

pub mod grid;
pub mod loader;
pub mod query;

pub use grid::{ImageGrid, Pixel, PixelFormat, RgbGrid};
pub use loader::{load_image, load_image_from_memory, DecodedImage};
pub use query::{color_at, describe, map_display_point, ImageInfo};
