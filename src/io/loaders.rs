use log::info;
use polars::prelude::*;
use std::path::Path;

use crate::error::{VitalsError, VitalsResult};
use crate::parsing::table_parser;

/// Represents the source format of vitals data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalsSourceType {
    Csv,
    Parquet,
    Ipc,
}

/// Result of loading vitals data
#[derive(Debug)]
pub struct VitalsLoadResult {
    pub dataframe: DataFrame,
    pub source_type: VitalsSourceType,
    pub num_samples: usize,
}

impl VitalsLoadResult {
    pub fn new(dataframe: DataFrame, source_type: VitalsSourceType) -> Self {
        let num_samples = dataframe.height();
        Self {
            dataframe,
            source_type,
            num_samples,
        }
    }
}

/// Unified interface for loading vitals data from CSV, Parquet, or Arrow IPC
pub struct VitalsLoader;

impl VitalsLoader {
    /// Load vitals data from a file (format detected from the extension)
    pub fn load_from_file(path: &Path) -> VitalsResult<VitalsLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                VitalsError::Load(format!("{}: file has no extension", path.display()))
            })?;

        match extension.to_lowercase().as_str() {
            "csv" => Self::load_from_csv(path),
            "parquet" => Self::load_from_parquet(path),
            "ipc" | "feather" | "arrow" => Self::load_from_ipc(path),
            other => Err(VitalsError::Load(format!(
                "Unsupported file format: {}",
                other
            ))),
        }
    }

    /// Load vitals data from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> VitalsResult<VitalsLoadResult> {
        let df = table_parser::parse_vitals_csv(csv_path)?;
        info!("loaded {} vitals samples from {}", df.height(), csv_path.display());
        Ok(VitalsLoadResult::new(df, VitalsSourceType::Csv))
    }

    /// Load vitals data from a Parquet file
    pub fn load_from_parquet(parquet_path: &Path) -> VitalsResult<VitalsLoadResult> {
        let df = table_parser::parse_vitals_parquet(parquet_path)?;
        info!(
            "loaded {} vitals samples from {}",
            df.height(),
            parquet_path.display()
        );
        Ok(VitalsLoadResult::new(df, VitalsSourceType::Parquet))
    }

    /// Load vitals data from an Arrow IPC (Feather) file
    pub fn load_from_ipc(ipc_path: &Path) -> VitalsResult<VitalsLoadResult> {
        let df = table_parser::parse_vitals_ipc(ipc_path)?;
        info!("loaded {} vitals samples from {}", df.height(), ipc_path.display());
        Ok(VitalsLoadResult::new(df, VitalsSourceType::Ipc))
    }
}

/// Loader for a pre-serialized long-format table.
///
/// Alternate entry point equivalent in shape to the output of
/// [`crate::reshape::combine_periods`]: a `period` column plus one or more
/// Float64 value columns.
pub struct LongFormatLoader;

impl LongFormatLoader {
    /// Load a long-format table from a file (format detected from the extension)
    pub fn load_from_file(path: &Path) -> VitalsResult<DataFrame> {
        let df = table_parser::read_table(path)?;
        table_parser::validate_long_format(&df)?;
        info!(
            "loaded long-format table with {} rows from {}",
            df.height(),
            path.display()
        );
        Ok(df)
    }
}
