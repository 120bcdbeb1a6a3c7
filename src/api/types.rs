//! Plot-facing view types.
//!
//! These types use only primitives (f64, usize, String, Vec) and are
//! isolated from Polars internals, so a plotting layer never touches a
//! DataFrame directly.

use serde::{Deserialize, Serialize};

/// Summary statistics for one numeric signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

/// Histogram over a fixed domain with explicit clipping.
///
/// `bin_edges` has `counts.len() + 1` entries; the final bin is truncated
/// at the domain maximum when the domain is not a whole number of widths.
/// Values outside the domain are dropped, not clamped; `dropped` records
/// how many.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub bin_edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bin_width: f64,
    pub total_counted: usize,
    pub dropped: usize,
}

/// Kernel-density estimate sampled on an even grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityEstimate {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
    /// Bandwidth actually used (Silverman's rule scaled by the adjust factor).
    pub bandwidth: f64,
    pub n_samples: usize,
}

/// One point of a kernel-smoothed trend curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothedPoint {
    pub x: f64,
    pub y_smoothed: f64,
    /// Number of observations with non-negligible kernel weight at this point.
    pub n_samples: usize,
}

/// Time-series view of a vitals table or selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesView {
    pub time: Vec<f64>,
    pub hr: Vec<f64>,
    pub spo2: Vec<f64>,
}

/// One numeric column of a long-format table, paired row-wise with its
/// period label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongFormatView {
    pub period: Vec<String>,
    pub values: Vec<f64>,
}
