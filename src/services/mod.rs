//! Numeric summary services feeding the plot-facing API.
//!
//! - [`summary`]: summary statistics, histograms, kernel-density estimates
//! - [`trends`]: kernel-smoothed trend curves for time-series overlays

pub mod summary;
pub mod trends;

pub use summary::{compute_stats, histogram, kernel_density};
pub use trends::smoothed_trend;
