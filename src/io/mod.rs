//! High-level data loading utilities.
//!
//! This module provides loaders that combine file parsing with schema
//! enforcement and produce ready-to-use DataFrames. Format detection is
//! driven by the file extension.
//!
//! # Example
//!
//! ```no_run
//! use nicu_vitals::io::loaders::VitalsLoader;
//! use std::path::Path;
//!
//! let result = VitalsLoader::load_from_file(Path::new("vitals.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} samples", result.num_samples);
//! ```

pub mod loaders;


pub use loaders::{LongFormatLoader, VitalsLoadResult, VitalsLoader, VitalsSourceType};
