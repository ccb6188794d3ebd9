//! Cooperative cancellation for long-running simulations.
//!
//! A [`CancelToken`] is a cheaply cloneable flag shared between the caller
//! and the simulation loop. Path generators check it between time steps,
//! so a multi-year, high-path-count run can be abandoned promptly without
//! any notion of preemption.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag.
///
/// Clones observe the same underlying flag. Cancellation is one-way: once
/// set, the token stays cancelled.
///
/// # Examples
///
/// ```rust
/// use pathcast_core::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
///
/// assert!(!observer.is_cancelled());
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. All clones observe the change.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
