//! Numeric helpers shared across the workspace.

pub mod stats;
