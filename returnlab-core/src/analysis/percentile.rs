//! Nearest-rank percentiles by integer indexing into a sorted sample.
//!
//! `index = percentile * n / 100` with floor division, clamped to `[0, n-1]`.
//! No interpolation between ranks.

use serde::{Deserialize, Serialize};

/// Percentiles are reported at 0, 5, ..., 100.
pub const PERCENTILE_STEP: u32 = 5;

/// A single reported percentile of the return sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentilePoint {
    pub percentile: u32,
    /// Percentage return at this rank.
    pub value: f64,
}

/// Sample index for `percentile` in a sorted sample of length `n`.
///
/// Returns 0 for an empty sample; callers must not index an empty sample.
pub fn percentile_index(percentile: u32, n: usize) -> usize {
    let index = percentile as usize * n / 100;
    index.min(n.saturating_sub(1))
}

/// Sort a copy of `sample` ascending and read off the 21 percentile points.
///
/// An empty sample yields no points.
pub fn nearest_rank_percentiles(sample: &[f64]) -> Vec<PercentilePoint> {
    if sample.is_empty() {
        return Vec::new();
    }
    let mut sorted = sample.to_vec();
    // Negative NaN sorts first, positive NaN last.
    sorted.sort_by(f64::total_cmp);

    (0..=100)
        .step_by(PERCENTILE_STEP as usize)
        .map(|percentile| PercentilePoint {
            percentile,
            value: sorted[percentile_index(percentile, sorted.len())],
        })
        .collect()
}
