//! Top-K selection over a histogram

use crate::analysis::histogram::{ColorHistogram, HistogramEntry};

/// Return at most `k` entries, highest count first
///
/// Equal counts keep the histogram's first-seen order (the sort is stable), so
/// the output is deterministic for a given sampling order.
pub fn select_top(histogram: &ColorHistogram, k: usize) -> Vec<HistogramEntry> {
    let mut ranked = histogram.entries().to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::histogram::HistogramAggregator;
    use crate::analysis::quantizer::ColorQuantizer;
    use crate::raster::Pixel;
    use crate::Color;

    fn histogram_of(colors: &[Color]) -> ColorHistogram {
        let pixels = colors.iter().enumerate().map(|(i, &color)| Pixel {
            x: i as u32,
            y: 0,
            color,
        });
        HistogramAggregator::new(ColorQuantizer::with_step(1))
            .build(pixels)
            .unwrap()
    }

    #[test]
    fn test_orders_by_count() {
        let a = Color::new(1, 0, 0);
        let b = Color::new(2, 0, 0);
        let c = Color::new(3, 0, 0);
        let histogram = histogram_of(&[a, b, b, c, c, c]);

        let top = select_top(&histogram, 10);
        let colors: Vec<Color> = top.iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![c, b, a]);
        assert_eq!(top[0].count, 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let a = Color::new(1, 0, 0);
        let b = Color::new(2, 0, 0);
        let c = Color::new(3, 0, 0);
        let histogram = histogram_of(&[b, a, c, a, b, c]);

        let colors: Vec<Color> = select_top(&histogram, 3).iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![b, a, c]);
    }

    #[test]
    fn test_truncates_to_k() {
        let colors: Vec<Color> = (0..20).map(|i| Color::new(i, 0, 0)).collect();
        let histogram = histogram_of(&colors);

        assert_eq!(select_top(&histogram, 10).len(), 10);
        assert_eq!(select_top(&histogram, 25).len(), 20);
        assert!(select_top(&histogram, 0).is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ranking_is_descending_and_bounded(
                channels in prop::collection::vec(0u8..8, 1..300),
                k in 0usize..15,
            ) {
                let colors: Vec<Color> = channels.iter().map(|&v| Color::new(v, v, 0)).collect();
                let histogram = histogram_of(&colors);
                let top = select_top(&histogram, k);

                prop_assert!(top.len() <= k);
                prop_assert!(top.len() <= histogram.len());
                prop_assert_eq!(top.len(), k.min(histogram.len()));
                for pair in top.windows(2) {
                    prop_assert!(pair[0].count >= pair[1].count);
                }
            }
        }
    }
}
