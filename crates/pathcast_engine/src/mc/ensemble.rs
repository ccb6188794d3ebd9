//! Path ensemble storage.
//!
//! A [`PathEnsemble`] is the dense `n_paths x n_steps` matrix produced by
//! one simulation run. Values are stored row-major and path-major
//! (`data[path * n_steps + step]`) so each path's trajectory is a
//! contiguous slice; the aggregator gathers one step across all paths
//! with a strided pass.
//!
//! Ensembles are created in one call and never mutated afterwards: the
//! caller owns the result outright and either aggregates it or keeps it
//! for further use.

/// Dense matrix of simulated trajectories, one row per path.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::PathEnsemble;
///
/// let ensemble = PathEnsemble::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
/// assert_eq!(ensemble.path(0), &[1.0, 2.0]);
/// assert_eq!(ensemble.value(1, 0), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathEnsemble {
    /// Row-major values, `n_paths * n_steps` long.
    data: Vec<f64>,
    /// Number of paths (rows).
    n_paths: usize,
    /// Number of time steps (columns).
    n_steps: usize,
}

impl PathEnsemble {
    /// Allocates a zero-filled ensemble.
    pub fn zeroed(n_paths: usize, n_steps: usize) -> Self {
        Self {
            data: vec![0.0; n_paths * n_steps],
            n_paths,
            n_steps,
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n_paths * n_steps`.
    pub fn from_vec(data: Vec<f64>, n_paths: usize, n_steps: usize) -> Self {
        assert_eq!(
            data.len(),
            n_paths * n_steps,
            "ensemble buffer length must equal n_paths * n_steps"
        );
        Self {
            data,
            n_paths,
            n_steps,
        }
    }

    /// Concatenates ensembles along the path dimension.
    ///
    /// Used by the driver to stitch independently generated path blocks
    /// back into one result, preserving block order.
    ///
    /// # Panics
    ///
    /// Panics if the parts disagree on step count, or if `parts` is empty.
    pub fn stitch(parts: Vec<PathEnsemble>) -> Self {
        let n_steps = parts
            .first()
            .expect("stitch requires at least one block")
            .n_steps;
        let n_paths: usize = parts.iter().map(|p| p.n_paths).sum();

        let mut data = Vec::with_capacity(n_paths * n_steps);
        for part in parts {
            assert_eq!(part.n_steps, n_steps, "all blocks must share a step count");
            data.extend_from_slice(&part.data);
        }
        Self {
            data,
            n_paths,
            n_steps,
        }
    }

    /// Number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps (columns).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// One path's full trajectory.
    #[inline]
    pub fn path(&self, path: usize) -> &[f64] {
        &self.data[path * self.n_steps..(path + 1) * self.n_steps]
    }

    /// Mutable view of one path's trajectory.
    #[inline]
    pub(crate) fn path_mut(&mut self, path: usize) -> &mut [f64] {
        &mut self.data[path * self.n_steps..(path + 1) * self.n_steps]
    }

    /// The value of `path` at time index `step`.
    #[inline]
    pub fn value(&self, path: usize, step: usize) -> f64 {
        self.data[path * self.n_steps + step]
    }

    /// Writes the value of `path` at time index `step`.
    #[inline]
    pub(crate) fn set(&mut self, path: usize, step: usize, value: f64) {
        self.data[path * self.n_steps + step] = value;
    }

    /// Gathers the cross-section at `step` into `out` (cleared first).
    pub fn gather_step(&self, step: usize, out: &mut Vec<f64>) {
        out.clear();
        out.extend((0..self.n_paths).map(|p| self.value(p, step)));
    }

    /// Iterator over path trajectories.
    pub fn iter_paths(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_steps)
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
