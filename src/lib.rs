//! NICU vital-signs analysis core.
//!
//! Loads a time-indexed vital-signs table (TIME, HR, SPO2.PCT) from a
//! column-oriented file, derives row-range selections and long-format
//! comparison tables from it, and computes plot-ready summaries
//! (statistics, histograms, kernel-density estimates, smoothed trends).
//! Rendering belongs to an external plotting layer; the [`api`] module
//! exposes flat, serializable views for it.

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod reshape;
pub mod selection;
pub mod services;

pub use error::{VitalsError, VitalsResult};
