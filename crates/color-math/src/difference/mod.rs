//! Color difference metrics
//!
//! Perceptual metrics operate on [`Lab`]; the fast metric operates on the
//! integer [`LumaChroma`] triple and exists only to pick neighbors on a
//! coarse grid.

mod ciede2000;
mod fast;

pub use ciede2000::{ciede2000, delta_e};
pub use fast::{fast_difference, fast_luma_chroma, LumaChroma};

use crate::color::Lab;

/// Distance metric for comparing two [`Lab`] colors.
///
/// Both variants return squared-scale values, so the smaller result is
/// always the closer color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceMetric {
    /// Squared CIEDE2000 (Sharma, Wu & Dalal, 2005).
    #[default]
    Ciede2000,

    /// Per-axis weighted squared Euclidean distance, see [`weighted_euclidean`].
    WeightedEuclidean {
        /// Extra weight on lightness differences
        bias_l: f32,
        /// Extra weight on green-red differences
        bias_a: f32,
        /// Extra weight on blue-yellow differences
        bias_b: f32,
    },
}

impl DistanceMetric {
    /// Compute the difference between two colors under this metric.
    #[inline]
    pub fn difference(self, x: Lab, y: Lab) -> f32 {
        match self {
            DistanceMetric::Ciede2000 => ciede2000(x, y),
            DistanceMetric::WeightedEuclidean {
                bias_l,
                bias_a,
                bias_b,
            } => weighted_euclidean(x, y, bias_l, bias_a, bias_b),
        }
    }
}

/// Weighted squared Euclidean distance in Lab.
///
/// Formula: `11 * bias_l * dL² + 1.6 * bias_a * da² + bias_b * db²`
///
/// Not perceptually uniform, but several times cheaper than [`ciede2000`].
///
/// # Example
///
/// ```
/// use color_math::{weighted_euclidean, Lab};
///
/// let x = Lab::new(50.0, 0.0, 0.0, 1.0);
/// let y = Lab::new(51.0, 1.0, 1.0, 1.0);
/// assert!((weighted_euclidean(x, y, 1.0, 1.0, 1.0) - 13.6).abs() < 1e-4);
/// ```
#[inline]
pub fn weighted_euclidean(x: Lab, y: Lab, bias_l: f32, bias_a: f32, bias_b: f32) -> f32 {
    let dl = x.l - y.l;
    let da = x.a - y.a;
    let db = x.b - y.b;
    11.0 * bias_l * dl * dl + 1.6 * bias_a * da * da + bias_b * db * db
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_weighted_euclidean_weights() {
        let x = Lab::new(10.0, 0.0, 0.0, 1.0);
        assert_eq!(
            weighted_euclidean(x, Lab::new(12.0, 0.0, 0.0, 1.0), 1.0, 1.0, 1.0),
            44.0
        );
        assert_eq!(
            weighted_euclidean(x, Lab::new(10.0, 2.0, 0.0, 1.0), 1.0, 1.0, 1.0),
            6.4
        );
        assert_eq!(
            weighted_euclidean(x, Lab::new(10.0, 0.0, 2.0, 1.0), 1.0, 1.0, 2.0),
            8.0
        );
        assert_eq!(weighted_euclidean(x, x, 3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_metric_dispatch() {
        let red = Lab::from(Rgba::new(0xFF0000FF));
        let orange = Lab::from(Rgba::new(0xFF8000FF));

        assert_eq!(
            DistanceMetric::default().difference(red, orange),
            ciede2000(red, orange)
        );

        let weighted = DistanceMetric::WeightedEuclidean {
            bias_l: 1.0,
            bias_a: 0.5,
            bias_b: 2.0,
        };
        assert_eq!(
            red.difference(orange, weighted),
            weighted_euclidean(red, orange, 1.0, 0.5, 2.0)
        );
    }

    /// Both metrics agree that orange is closer to red than blue is.
    #[test]
    fn test_metrics_rank_consistently() {
        let red = Lab::from(Rgba::new(0xFF0000FF));
        let orange = Lab::from(Rgba::new(0xFF6000FF));
        let blue = Lab::from(Rgba::new(0x0000FFFF));

        for metric in [
            DistanceMetric::Ciede2000,
            DistanceMetric::WeightedEuclidean {
                bias_l: 1.0,
                bias_a: 1.0,
                bias_b: 1.0,
            },
        ] {
            assert!(
                red.difference(orange, metric) < red.difference(blue, metric),
                "{metric:?} ranked blue closer to red than orange"
            );
        }
    }
}
