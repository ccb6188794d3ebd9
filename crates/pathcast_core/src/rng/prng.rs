//! Seeded pseudo-random number generator for simulation workloads.
//!
//! [`SimRng`] wraps [`rand::rngs::StdRng`] and exposes the operations the
//! path generators need: batch standard-normal fills, the 2x2
//! Cholesky-style correlated pair construction used by stochastic
//! volatility models, and stream forking for parallel path generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Simulation random number generator.
///
/// A seeded PRNG with batch operations for standard-normal innovations.
/// The same seed always produces the same sequence, which makes whole
/// simulation runs reproducible.
///
/// # Examples
///
/// ```rust
/// use pathcast_core::SimRng;
///
/// let mut rng = SimRng::from_seed(42);
///
/// let z: f64 = rng.gen_normal();
/// assert!(z.is_finite());
///
/// let mut buffer = vec![0.0; 128];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct SimRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, kept for logging and forking.
    seed: u64,
}

impl SimRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same innovation sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathcast_core::SimRng;
    ///
    /// let mut a = SimRng::from_seed(7);
    /// let mut b = SimRng::from_seed(7);
    /// assert_eq!(a.gen_normal(), b.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from OS entropy.
    ///
    /// Used when the caller did not request reproducibility. The drawn
    /// seed is retained so it can still be logged after the fact.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::from_seed(seed)
    }

    /// Returns the seed this generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a single standard-normal variate (mean 0, variance 1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with independent standard-normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller. An
    /// empty buffer is a no-op.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = StandardNormal.sample(&mut self.inner);
        }
    }

    /// Fills two buffers with standard-normal variates correlated at `rho`.
    ///
    /// Uses the 2x2 Cholesky construction: with independent draws
    /// `z1` and `z`, the second stream is
    /// `z2 = rho * z1 + sqrt(1 - rho^2) * z`, which has unit variance and
    /// correlation `rho` with the first stream at every index.
    ///
    /// # Panics
    ///
    /// Panics if the buffers differ in length (simulation code always
    /// sizes them together) or if `rho` lies outside `[-1, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathcast_core::SimRng;
    ///
    /// let mut rng = SimRng::from_seed(42);
    /// let mut z1 = vec![0.0; 10_000];
    /// let mut z2 = vec![0.0; 10_000];
    /// rng.fill_correlated_normal(-0.7, &mut z1, &mut z2);
    ///
    /// let sample_corr: f64 =
    ///     z1.iter().zip(&z2).map(|(a, b)| a * b).sum::<f64>() / 10_000.0;
    /// assert!((sample_corr - (-0.7)).abs() < 0.05);
    /// ```
    pub fn fill_correlated_normal(&mut self, rho: f64, z1: &mut [f64], z2: &mut [f64]) {
        assert_eq!(z1.len(), z2.len(), "correlated buffers must match in length");
        assert!((-1.0..=1.0).contains(&rho), "rho must lie in [-1, 1]");

        let orth = (1.0 - rho * rho).sqrt();
        for (a, b) in z1.iter_mut().zip(z2.iter_mut()) {
            let u: f64 = StandardNormal.sample(&mut self.inner);
            let v: f64 = StandardNormal.sample(&mut self.inner);
            *a = u;
            *b = rho * u + orth * v;
        }
    }

    /// Derives `n` independent child generators from this one.
    ///
    /// Child seeds are drawn from the parent stream, so the family of
    /// streams is fully determined by the parent seed. This is how the
    /// engine hands each parallel worker a private, non-overlapping
    /// stream: workers never share a generator, and the decomposition is
    /// reproducible regardless of thread scheduling.
    pub fn fork(&mut self, n: usize) -> Vec<SimRng> {
        (0..n).map(|_| SimRng::from_seed(self.inner.gen())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::from_seed(12345);
        let mut b = SimRng::from_seed(12345);
        for _ in 0..100 {
            assert_eq!(a.gen_normal(), b.gen_normal());
        }
    }

    #[test]
    fn fill_normal_has_sane_moments() {
        let mut rng = SimRng::from_seed(42);
        let mut buffer = vec![0.0; 100_000];
        rng.fill_normal(&mut buffer);

        let n = buffer.len() as f64;
        let mean = buffer.iter().sum::<f64>() / n;
        let var = buffer.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / n;

        assert!(mean.abs() < 0.02, "sample mean {} too far from 0", mean);
        assert!((var - 1.0).abs() < 0.02, "sample variance {} too far from 1", var);
    }

    #[test]
    fn empty_buffer_is_noop() {
        let mut rng = SimRng::from_seed(42);
        let mut empty: Vec<f64> = vec![];
        rng.fill_normal(&mut empty);
    }

    #[test]
    fn correlated_fill_hits_target_rho() {
        let mut rng = SimRng::from_seed(7);
        let n = 200_000;
        let mut z1 = vec![0.0; n];
        let mut z2 = vec![0.0; n];
        rng.fill_correlated_normal(0.6, &mut z1, &mut z2);

        let corr = z1.iter().zip(&z2).map(|(a, b)| a * b).sum::<f64>() / n as f64;
        assert!((corr - 0.6).abs() < 0.02, "sample correlation {}", corr);
    }

    #[test]
    fn correlated_fill_extreme_rho() {
        let mut rng = SimRng::from_seed(7);
        let mut z1 = vec![0.0; 100];
        let mut z2 = vec![0.0; 100];

        rng.fill_correlated_normal(1.0, &mut z1, &mut z2);
        for (a, b) in z1.iter().zip(&z2) {
            assert_eq!(a, b);
        }

        rng.fill_correlated_normal(-1.0, &mut z1, &mut z2);
        for (a, b) in z1.iter().zip(&z2) {
            assert_eq!(*a, -*b);
        }
    }

    #[test]
    #[should_panic(expected = "rho")]
    fn correlated_fill_rejects_out_of_range_rho() {
        let mut rng = SimRng::from_seed(7);
        let mut z1 = vec![0.0; 4];
        let mut z2 = vec![0.0; 4];
        rng.fill_correlated_normal(1.5, &mut z1, &mut z2);
    }

    #[test]
    fn fork_is_deterministic_and_streams_differ() {
        let children_a: Vec<u64> = SimRng::from_seed(99).fork(4).iter().map(|c| c.seed()).collect();
        let children_b: Vec<u64> = SimRng::from_seed(99).fork(4).iter().map(|c| c.seed()).collect();
        assert_eq!(children_a, children_b);

        // Sibling streams should diverge immediately.
        let mut children = SimRng::from_seed(99).fork(2);
        let (left, right) = children.split_at_mut(1);
        assert_ne!(left[0].gen_normal(), right[0].gen_normal());
    }
}
