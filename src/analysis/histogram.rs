//! Frequency histogram of quantized colors

use std::collections::HashMap;

use crate::analysis::quantizer::ColorQuantizer;
use crate::raster::Pixel;
use crate::{Color, ColorError, Result};

/// A quantized color and the number of samples that fell into it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistogramEntry {
    pub color: Color,
    pub count: usize,
}

/// Bucket counts over one sampled image
///
/// Entries keep first-seen order, which the ranking step uses to break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    entries: Vec<HistogramEntry>,
    total_samples: usize,
}

impl ColorHistogram {
    /// Entries in first-seen order
    pub fn entries(&self) -> &[HistogramEntry] {
        &self.entries
    }

    /// Number of pixels consumed, not the number of buckets
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Number of distinct buckets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of all samples that `count` represents
    pub fn frequency(&self, count: usize) -> f64 {
        count as f64 / self.total_samples as f64
    }

    pub fn count_of(&self, color: Color) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.color == color)
            .map(|entry| entry.count)
    }
}

/// Builds a [`ColorHistogram`] from sampled pixels
#[derive(Debug, Clone, Copy, Default)]
pub struct HistogramAggregator {
    quantizer: ColorQuantizer,
}

impl HistogramAggregator {
    pub fn new(quantizer: ColorQuantizer) -> Self {
        Self { quantizer }
    }

    /// Quantize and count every pixel of `pixels`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::EmptyImage` if `pixels` yields nothing, since
    /// frequencies would be undefined
    pub fn build<I>(&self, pixels: I) -> Result<ColorHistogram>
    where
        I: IntoIterator<Item = Pixel>,
    {
        let mut index: HashMap<Color, usize> = HashMap::new();
        let mut entries: Vec<HistogramEntry> = Vec::new();
        let mut total_samples = 0usize;

        for pixel in pixels {
            let bucket = self.quantizer.quantize(pixel.color);
            match index.get(&bucket) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(bucket, entries.len());
                    entries.push(HistogramEntry {
                        color: bucket,
                        count: 1,
                    });
                }
            }
            total_samples += 1;
        }

        if total_samples == 0 {
            return Err(ColorError::EmptyImage);
        }

        tracing::trace!(total_samples, buckets = entries.len(), "built color histogram");

        Ok(ColorHistogram {
            entries,
            total_samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(x: u32, color: Color) -> Pixel {
        Pixel { x, y: 0, color }
    }

    #[test]
    fn test_single_pixel_histogram() {
        let histogram = HistogramAggregator::default()
            .build([pixel(0, Color::new(10, 20, 30))])
            .unwrap();

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.total_samples(), 1);
        assert_eq!(
            histogram.entries()[0],
            HistogramEntry {
                color: Color::new(0, 16, 16),
                count: 1
            }
        );
        assert_eq!(histogram.frequency(1), 1.0);
    }

    #[test]
    fn test_near_duplicates_merge() {
        let pixels = [
            pixel(0, Color::new(200, 0, 0)),
            pixel(1, Color::new(0, 0, 255)),
            pixel(2, Color::new(207, 15, 3)),
            pixel(3, Color::new(192, 1, 1)),
        ];
        let histogram = HistogramAggregator::default().build(pixels).unwrap();

        assert_eq!(histogram.total_samples(), 4);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.count_of(Color::new(192, 0, 0)), Some(3));
        assert_eq!(histogram.count_of(Color::new(0, 0, 240)), Some(1));
        assert_eq!(histogram.count_of(Color::WHITE), None);
    }

    #[test]
    fn test_first_seen_order() {
        let pixels = [
            pixel(0, Color::new(0, 0, 255)),
            pixel(1, Color::new(255, 0, 0)),
            pixel(2, Color::new(255, 0, 0)),
        ];
        let histogram = HistogramAggregator::default().build(pixels).unwrap();
        let colors: Vec<Color> = histogram.entries().iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![Color::new(0, 0, 240), Color::new(240, 0, 0)]);
    }

    #[test]
    fn test_empty_input_fails() {
        let result = HistogramAggregator::default().build(std::iter::empty());
        assert!(matches!(result, Err(ColorError::EmptyImage)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn counts_sum_to_total(colors in prop::collection::vec(any::<(u8, u8, u8)>(), 1..200)) {
                let pixels = colors
                    .iter()
                    .enumerate()
                    .map(|(i, &(r, g, b))| pixel(i as u32, Color::new(r, g, b)));
                let histogram = HistogramAggregator::default().build(pixels).unwrap();

                let sum: usize = histogram.entries().iter().map(|e| e.count).sum();
                prop_assert_eq!(sum, histogram.total_samples());
                prop_assert_eq!(histogram.total_samples(), colors.len());
                prop_assert!(histogram.len() <= colors.len());
            }
        }
    }
}
