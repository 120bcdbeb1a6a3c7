//! Long-format reshaping of labeled range selections.
//!
//! Several slices of the vitals table are stacked into one table with an
//! added `period` column identifying each slice, the layout comparative
//! plots (grouped histograms, densities) expect.

use log::debug;
use polars::prelude::*;

use crate::error::{VitalsError, VitalsResult};
use crate::parsing::table_parser::PERIOD_COL;

/// Stack labeled selections into a single long-format table.
///
/// Rows keep the order of the input sequence and each selection's own row
/// order. Every selection must be non-empty. Duplicate labels on distinct
/// selections are allowed: they form distinct groups that share a display
/// label.
pub fn combine_periods(labeled: &[(DataFrame, &str)]) -> VitalsResult<DataFrame> {
    let mut parts = labeled.iter();

    let (first_df, first_label) = parts.next().ok_or_else(|| {
        VitalsError::Validation("no selections to combine".to_string())
    })?;
    let mut combined = tag_with_period(first_df, first_label)?;

    for (df, label) in parts {
        let tagged = tag_with_period(df, label)?;
        combined.vstack_mut(&tagged)?;
    }

    debug!(
        "combined {} selections into a long-format table of {} rows",
        labeled.len(),
        combined.height()
    );
    Ok(combined)
}

fn tag_with_period(df: &DataFrame, label: &str) -> VitalsResult<DataFrame> {
    if df.height() == 0 {
        return Err(VitalsError::Validation(format!(
            "selection labeled '{}' is empty",
            label
        )));
    }

    df.clone()
        .lazy()
        .with_column(lit(label).alias(PERIOD_COL))
        .collect()
        .map_err(VitalsError::from)
}
