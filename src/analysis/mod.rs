//! Dominant color extraction
//!
//! The pipeline samples the image on a strided grid, quantizes each sample
//! into a coarse bucket, counts the buckets and keeps the most frequent ones:
//!
//! ```text
//! ImageGrid -> PixelSampler -> ColorQuantizer -> HistogramAggregator -> select_top -> RankedColor
//! ```

pub mod histogram;
pub mod quantizer;
pub mod ranking;
pub mod sampler;

pub use histogram::{ColorHistogram, HistogramAggregator, HistogramEntry};
pub use quantizer::ColorQuantizer;
pub use ranking::select_top;
pub use sampler::{PixelSampler, Samples};

use serde::{Deserialize, Serialize};

use crate::color::ColorRecord;
use crate::constants::extraction::DEFAULT_MAX_COLORS;
use crate::raster::ImageGrid;
use crate::Result;

/// A dominant color with its share of the sampled pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedColor {
    #[serde(flatten)]
    pub color: ColorRecord,
    /// Bucket count divided by total samples, in `[0, 1]`
    pub frequency: f64,
    /// `frequency` as a percentage with one decimal, e.g. `"42.5%"`
    pub percentage: String,
}

impl RankedColor {
    pub fn new(entry: HistogramEntry, total_samples: usize) -> Self {
        let frequency = entry.count as f64 / total_samples as f64;
        Self {
            color: ColorRecord::from_color(entry.color),
            frequency,
            percentage: format_percentage(entry.count, total_samples),
        }
    }
}

/// `count / total` as a percentage with one decimal, rounding ties upward
fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let tenths = (count * 1000 + total / 2) / total;
    format!("{}.{}%", tenths / 10, tenths % 10)
}

/// Extracts the most frequent quantized colors of an image
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    sampler: PixelSampler,
    aggregator: HistogramAggregator,
    max_colors: usize,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new(
            PixelSampler::new(),
            ColorQuantizer::new(),
            DEFAULT_MAX_COLORS,
        )
    }
}

impl DominantColorExtractor {
    pub fn new(sampler: PixelSampler, quantizer: ColorQuantizer, max_colors: usize) -> Self {
        Self {
            sampler,
            aggregator: HistogramAggregator::new(quantizer),
            max_colors,
        }
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    /// Build the quantized histogram of `grid`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::EmptyImage` if sampling yields no pixels
    pub fn histogram<G: ImageGrid + ?Sized>(&self, grid: &G) -> Result<ColorHistogram> {
        let samples = self.sampler.sample(grid);
        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            stride = samples.stride(),
            expected_samples = samples.len(),
            "sampling image"
        );
        self.aggregator.build(samples)
    }

    /// Rank the dominant colors of `grid`, returning at most `max_colors`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::EmptyImage` if sampling yields no pixels
    pub fn extract<G: ImageGrid + ?Sized>(&self, grid: &G) -> Result<Vec<RankedColor>> {
        self.extract_top(grid, self.max_colors)
    }

    /// Like [`extract`](Self::extract) with an explicit cap
    pub fn extract_top<G: ImageGrid + ?Sized>(&self, grid: &G, k: usize) -> Result<Vec<RankedColor>> {
        let histogram = self.histogram(grid)?;
        let total = histogram.total_samples();

        let ranked: Vec<RankedColor> = select_top(&histogram, k)
            .into_iter()
            .map(|entry| RankedColor::new(entry, total))
            .collect();

        tracing::debug!(
            total_samples = total,
            buckets = histogram.len(),
            returned = ranked.len(),
            "ranked dominant colors"
        );

        Ok(ranked)
    }
}
