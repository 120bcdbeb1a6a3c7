//! File parsing for column-oriented vitals tables.
//!
//! This module reads CSV, Parquet, and Arrow IPC files into Polars
//! DataFrames and enforces the vitals schema (TIME, HR, SPO2.PCT as
//! Float64). Higher-level loading lives in [`crate::io`].

pub mod table_parser;

pub use table_parser::{
    enforce_vitals_schema, parse_vitals_csv, parse_vitals_ipc, parse_vitals_parquet, read_table,
    validate_long_format, HR_COL, PERIOD_COL, REQUIRED_COLUMNS, SPO2_COL, TIME_COL,
};
