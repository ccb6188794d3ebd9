//! Cross-sectional sample statistics.
//!
//! These helpers operate on a single cross-section (one time step across
//! all paths). Quantiles use linear interpolation between the two nearest
//! order statistics: for a sorted sample of size `n` the `q`-quantile sits
//! at position `q * (n - 1)`, and fractional positions interpolate between
//! the surrounding values. This is the same rule pandas and numpy apply by
//! default, so aggregated output is directly comparable and reproducible.

/// Arithmetic mean of a sample.
///
/// Returns `f64::NAN` for an empty sample, mirroring the quantile helpers.
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// The `q`-quantile of an already-sorted sample, `q` in `[0, 1]`.
///
/// # Panics
///
/// Panics if `q` lies outside `[0, 1]`. Callers sort once and query
/// several quantiles against the same sorted buffer.
///
/// # Examples
///
/// ```rust
/// use pathcast_core::math::stats::quantile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
/// assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
/// assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
/// ```
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    assert!((0.0..=1.0).contains(&q), "quantile level must lie in [0, 1]");
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Median (50th percentile) of an already-sorted sample.
#[inline]
pub fn median_sorted(sorted: &[f64]) -> f64 {
    quantile_sorted(sorted, 0.5)
}
