use log::debug;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::error::{VitalsError, VitalsResult};

/// Recording time column, in seconds from start of monitoring.
pub const TIME_COL: &str = "TIME";
/// Heart rate column, beats per minute.
pub const HR_COL: &str = "HR";
/// Oxygen saturation column, percent (0-100).
pub const SPO2_COL: &str = "SPO2.PCT";
/// Categorical group column added by the long-format reshaper.
pub const PERIOD_COL: &str = "period";

/// Columns every vitals table must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = [TIME_COL, HR_COL, SPO2_COL];

fn read_csv(csv_path: &Path) -> VitalsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .map_err(|e| VitalsError::Load(format!("{}: {}", csv_path.display(), e)))?
        .finish()
        .map_err(|e| VitalsError::Load(format!("Failed to parse CSV into DataFrame: {}", e)))
}

fn read_parquet(parquet_path: &Path) -> VitalsResult<DataFrame> {
    let file = File::open(parquet_path)
        .map_err(|e| VitalsError::Load(format!("{}: {}", parquet_path.display(), e)))?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| VitalsError::Load(format!("Failed to parse Parquet into DataFrame: {}", e)))
}

fn read_ipc(ipc_path: &Path) -> VitalsResult<DataFrame> {
    let file = File::open(ipc_path)
        .map_err(|e| VitalsError::Load(format!("{}: {}", ipc_path.display(), e)))?;
    IpcReader::new(file)
        .finish()
        .map_err(|e| VitalsError::Load(format!("Failed to parse IPC into DataFrame: {}", e)))
}

/// Parse a CSV file into a vitals DataFrame with the schema enforced.
pub fn parse_vitals_csv(csv_path: &Path) -> VitalsResult<DataFrame> {
    enforce_vitals_schema(read_csv(csv_path)?)
}

/// Parse a Parquet file into a vitals DataFrame with the schema enforced.
pub fn parse_vitals_parquet(parquet_path: &Path) -> VitalsResult<DataFrame> {
    enforce_vitals_schema(read_parquet(parquet_path)?)
}

/// Parse an Arrow IPC (Feather) file into a vitals DataFrame with the schema enforced.
pub fn parse_vitals_ipc(ipc_path: &Path) -> VitalsResult<DataFrame> {
    enforce_vitals_schema(read_ipc(ipc_path)?)
}

/// Read a table file by extension without applying the vitals schema.
///
/// Used for the secondary entry point (a pre-serialized long-format table),
/// which carries a `period` column instead of the raw vitals layout.
pub fn read_table(path: &Path) -> VitalsResult<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| VitalsError::Load(format!("{}: file has no extension", path.display())))?;

    match extension.to_lowercase().as_str() {
        "csv" => read_csv(path),
        "parquet" => read_parquet(path),
        "ipc" | "feather" | "arrow" => read_ipc(path),
        other => Err(VitalsError::Load(format!(
            "Unsupported file format: {}",
            other
        ))),
    }
}

/// Check required columns and cast them to Float64.
///
/// Integer-inferred columns (e.g. HR sampled at whole beats/min) are cast;
/// a missing required column is a load error naming the column.
pub fn enforce_vitals_schema(df: DataFrame) -> VitalsResult<DataFrame> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for name in REQUIRED_COLUMNS {
        if !column_names.contains(&name.to_string()) {
            return Err(VitalsError::Load(format!(
                "Missing required column: {}",
                name
            )));
        }
    }

    let mut lazy_df = df.lazy();
    for name in REQUIRED_COLUMNS {
        lazy_df = lazy_df.with_column(
            when(col(name).is_not_null())
                .then(col(name).cast(DataType::Float64))
                .otherwise(lit(NULL).cast(DataType::Float64))
                .alias(name),
        );
    }

    let df = lazy_df
        .collect()
        .map_err(|e| VitalsError::Load(format!("Failed to cast vitals columns: {}", e)))?;

    debug!("vitals schema enforced on {} rows", df.height());
    Ok(df)
}

/// Check that a table is in long format: a `period` column plus at least
/// one Float64 value column.
pub fn validate_long_format(df: &DataFrame) -> VitalsResult<()> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if !column_names.contains(&PERIOD_COL.to_string()) {
        return Err(VitalsError::Load(format!(
            "Long-format table is missing the '{}' column",
            PERIOD_COL
        )));
    }

    let has_value_column = df
        .get_columns()
        .iter()
        .any(|c| c.name().as_str() != PERIOD_COL && c.dtype() == &DataType::Float64);
    if !has_value_column {
        return Err(VitalsError::Load(
            "Long-format table has no Float64 value column".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            TIME_COL => [0i64, 1, 2],
            HR_COL => [150i64, 152, 149],
            SPO2_COL => [97.0, 96.5, 98.0],
        )
        .unwrap()
    }

    #[test]
    fn test_enforce_vitals_schema_casts_integers() {
        let df = enforce_vitals_schema(sample_df()).unwrap();
        assert_eq!(df.column(TIME_COL).unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column(HR_COL).unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column(SPO2_COL).unwrap().dtype(), &DataType::Float64);

        let hr = df.column(HR_COL).unwrap().f64().unwrap();
        assert_eq!(hr.get(0), Some(150.0));
    }

    #[test]
    fn test_enforce_vitals_schema_missing_column() {
        let df = df!(
            TIME_COL => [0.0, 1.0],
            HR_COL => [150.0, 152.0],
        )
        .unwrap();

        let err = enforce_vitals_schema(df).unwrap_err();
        assert!(err.to_string().contains("SPO2.PCT"));
    }

    #[test]
    fn test_enforce_vitals_schema_keeps_extra_columns() {
        let df = df!(
            TIME_COL => [0.0, 1.0],
            HR_COL => [150.0, 152.0],
            SPO2_COL => [97.0, 96.5],
            "RESP" => [44.0, 46.0],
        )
        .unwrap();

        let df = enforce_vitals_schema(df).unwrap();
        assert!(df.column("RESP").is_ok());
    }

    #[test]
    fn test_validate_long_format() {
        let long = df!(
            PERIOD_COL => ["24 weeks", "24 weeks", "34 weeks"],
            HR_COL => [150.0, 152.0, 160.0],
        )
        .unwrap();
        assert!(validate_long_format(&long).is_ok());

        let missing_period = df!(HR_COL => [150.0, 152.0]).unwrap();
        assert!(validate_long_format(&missing_period).is_err());

        let no_values = df!(PERIOD_COL => ["24 weeks"]).unwrap();
        assert!(validate_long_format(&no_values).is_err());
    }
}
