//! Cross-sectional aggregation of a path ensemble.
//!
//! Reduces an `n_paths x n_steps` ensemble to one summary row per time
//! step: arithmetic mean, median, and the 5th / 95th percentiles of the
//! cross-path distribution at that step. Each row depends only on its own
//! step's cross-section; no smoothing or windowing is applied across time.

use pathcast_core::math::stats;

use super::ensemble::PathEnsemble;

/// Summary statistics for one time step, taken across all paths.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryRow {
    /// Arithmetic mean across paths.
    pub mean: f64,
    /// Median (50th percentile, linear interpolation).
    pub median: f64,
    /// 5th percentile.
    pub q05: f64,
    /// 95th percentile.
    pub q95: f64,
}

/// Ordered per-step summaries of a path ensemble.
///
/// Row `k` summarises the ensemble's cross-section at time index `k`; the
/// frame has exactly as many rows as the ensemble has steps.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryFrame {
    rows: Vec<SummaryRow>,
}

impl SummaryFrame {
    /// Number of rows (time steps).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The summary at time index `step`.
    pub fn row(&self, step: usize) -> &SummaryRow {
        &self.rows[step]
    }

    /// All rows in time order.
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Iterator over rows in time order.
    pub fn iter(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter()
    }
}

/// Reduces an ensemble to per-step summary statistics.
///
/// Quantiles interpolate linearly between the two nearest order
/// statistics (see [`pathcast_core::math::stats::quantile_sorted`]), so
/// output is reproducible and matches the conventional dataframe
/// `quantile` semantics.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::{aggregate, PathEnsemble};
///
/// let ensemble = PathEnsemble::from_vec(vec![1.0, 1.0, 3.0, 3.0], 2, 2);
/// let frame = aggregate(&ensemble);
/// assert_eq!(frame.len(), 2);
/// assert_eq!(frame.row(0).mean, 2.0);
/// assert_eq!(frame.row(0).median, 2.0);
/// ```
pub fn aggregate(ensemble: &PathEnsemble) -> SummaryFrame {
    let mut cross = Vec::with_capacity(ensemble.n_paths());
    let mut rows = Vec::with_capacity(ensemble.n_steps());

    for step in 0..ensemble.n_steps() {
        ensemble.gather_step(step, &mut cross);
        let mean = stats::mean(&cross);
        cross.sort_by(f64::total_cmp);
        rows.push(SummaryRow {
            mean,
            median: stats::median_sorted(&cross),
            q05: stats::quantile_sorted(&cross, 0.05),
            q95: stats::quantile_sorted(&cross, 0.95),
        });
    }

    SummaryFrame { rows }
}
