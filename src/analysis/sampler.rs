//! Strided pixel sampling
//!
//! The stride is `max(1, min(width, height) / grid)`, so roughly `grid x grid`
//! points are visited however large the image is. Traversal is column-major:
//! the outer loop walks `x`, the inner loop walks `y`.

use crate::constants::extraction::SAMPLE_GRID;
use crate::raster::{ImageGrid, Pixel};

/// Samples a bounded, evenly spaced subset of an image's pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSampler {
    grid: u32,
}

impl Default for PixelSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSampler {
    /// Sampler targeting a 100x100 sample grid
    pub fn new() -> Self {
        Self::with_grid(SAMPLE_GRID)
    }

    /// Sampler targeting `grid` samples along the shorter side; 0 is treated as 1
    pub fn with_grid(grid: u32) -> Self {
        Self { grid: grid.max(1) }
    }

    /// Step between sampled rows and columns for a `width x height` image
    pub fn stride(&self, width: u32, height: u32) -> u32 {
        (width.min(height) / self.grid).max(1)
    }

    /// Lazily sample `grid`
    ///
    /// The returned iterator is finite and can be cloned to restart the
    /// traversal. Calling `sample` again yields the same sequence.
    pub fn sample<'a, G: ImageGrid + ?Sized>(&self, grid: &'a G) -> Samples<'a, G> {
        Samples {
            grid,
            width: grid.width(),
            height: grid.height(),
            stride: self.stride(grid.width(), grid.height()),
            x: 0,
            y: 0,
        }
    }
}

/// Iterator over sampled pixels, see [`PixelSampler::sample`]
#[derive(Debug)]
pub struct Samples<'a, G: ?Sized> {
    grid: &'a G,
    width: u32,
    height: u32,
    stride: u32,
    x: u32,
    y: u32,
}

impl<G: ?Sized> Clone for Samples<'_, G> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<G: ImageGrid + ?Sized> Samples<'_, G> {
    pub fn stride(&self) -> u32 {
        self.stride
    }

    fn remaining(&self) -> usize {
        if self.height == 0 || self.x >= self.width {
            return 0;
        }
        let per_column = self.height.div_ceil(self.stride) as usize;
        let columns_after = (self.width - self.x - 1) / self.stride;
        let left_in_column = (self.height.saturating_sub(self.y)).div_ceil(self.stride) as usize;
        columns_after as usize * per_column + left_in_column
    }
}

impl<G: ImageGrid + ?Sized> Iterator for Samples<'_, G> {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.height == 0 {
            return None;
        }
        while self.x < self.width {
            if self.y < self.height {
                let (x, y) = (self.x, self.y);
                self.y = self.y.saturating_add(self.stride);
                return Some(Pixel {
                    x,
                    y,
                    color: self.grid.color_at(x, y),
                });
            }
            self.x = self.x.saturating_add(self.stride);
            self.y = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<G: ImageGrid + ?Sized> ExactSizeIterator for Samples<'_, G> {}

impl<G: ImageGrid + ?Sized> std::iter::FusedIterator for Samples<'_, G> {}
