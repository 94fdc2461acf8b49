//! Color bucketing for histogram keys

use crate::constants::extraction::QUANTIZATION_STEP;
use crate::Color;

/// Maps colors onto a coarse grid so near-duplicates share a bucket
///
/// Each channel is rounded down to a multiple of the step. With the default
/// step of 16 every channel lands on one of `0, 16, ..., 240`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorQuantizer {
    step: u8,
}

impl Default for ColorQuantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorQuantizer {
    pub fn new() -> Self {
        Self::with_step(QUANTIZATION_STEP)
    }

    /// Quantizer with a custom bucket width; 0 is treated as 1 (no merging)
    pub fn with_step(step: u8) -> Self {
        Self { step: step.max(1) }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn quantize(&self, color: Color) -> Color {
        Color::new(
            self.quantize_channel(color.r),
            self.quantize_channel(color.g),
            self.quantize_channel(color.b),
        )
    }

    fn quantize_channel(&self, value: u8) -> u8 {
        value - value % self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_down() {
        let quantizer = ColorQuantizer::new();
        assert_eq!(
            quantizer.quantize(Color::new(10, 20, 30)),
            Color::new(0, 16, 16)
        );
        assert_eq!(
            quantizer.quantize(Color::new(255, 240, 239)),
            Color::new(240, 240, 224)
        );
        assert_eq!(quantizer.quantize(Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_neighbours_share_bucket() {
        let quantizer = ColorQuantizer::new();
        assert_eq!(
            quantizer.quantize(Color::new(33, 47, 63)),
            quantizer.quantize(Color::new(32, 32, 48))
        );
    }

    #[test]
    fn test_step_of_one_is_identity() {
        let quantizer = ColorQuantizer::with_step(0);
        assert_eq!(quantizer.step(), 1);
        let color = Color::new(13, 77, 201);
        assert_eq!(quantizer.quantize(color), color);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn quantized_channels_are_bucket_floors(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let quantizer = ColorQuantizer::new();
                let input = Color::new(r, g, b);
                let bucket = quantizer.quantize(input);

                for (out, original) in [(bucket.r, r), (bucket.g, g), (bucket.b, b)] {
                    prop_assert_eq!(out % 16, 0);
                    prop_assert!(out <= 240);
                    prop_assert!(out <= original);
                    prop_assert!(original - out < 16);
                }
                prop_assert_eq!(quantizer.quantize(input), bucket);
                prop_assert_eq!(quantizer.quantize(bucket), bucket);
            }
        }
    }
}
