//! # API Module
//!
//! Plot-facing surface of the crate. A rendering layer (any plotting
//! library) consumes the flat view types defined here; no drawing logic
//! lives in the core.
//!
//! - [`types`]: serializable view DTOs built from primitives only
//! - [`conversions`]: DataFrame-to-view conversion helpers
//!
//! All views serialize to JSON via serde, so a renderer in another process
//! or language can consume them unchanged.

pub mod conversions;
pub mod types;

pub use conversions::{dataframe_to_timeseries, long_format_to_view, numeric_column, view_to_json};
pub use types::*;
