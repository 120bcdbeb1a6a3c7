//! Conversions from DataFrames to plot-facing views.

use log::warn;
use polars::prelude::*;

use crate::api::types::{LongFormatView, TimeSeriesView};
use crate::error::{VitalsError, VitalsResult};
use crate::parsing::table_parser::{HR_COL, PERIOD_COL, SPO2_COL, TIME_COL};

/// Extract a Float64 column as a plain vector, skipping nulls.
pub fn numeric_column(df: &DataFrame, name: &str) -> VitalsResult<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| VitalsError::Validation(format!("Missing column '{}'", name)))?;
    let ca = column
        .f64()
        .map_err(|_| VitalsError::Validation(format!("Column '{}' is not Float64", name)))?;

    let values: Vec<f64> = ca.into_iter().flatten().collect();
    let nulls = ca.len() - values.len();
    if nulls > 0 {
        warn!("column '{}' has {} null samples, skipped", name, nulls);
    }
    Ok(values)
}

/// Build a time-series view from a vitals table or range selection.
///
/// Rows are kept aligned: a row missing any of the three signals is
/// dropped whole, so the vectors stay the same length.
pub fn dataframe_to_timeseries(df: &DataFrame) -> VitalsResult<TimeSeriesView> {
    let time_ca = float_column(df, TIME_COL)?;
    let hr_ca = float_column(df, HR_COL)?;
    let spo2_ca = float_column(df, SPO2_COL)?;

    let height = df.height();
    let mut time = Vec::with_capacity(height);
    let mut hr = Vec::with_capacity(height);
    let mut spo2 = Vec::with_capacity(height);
    let mut dropped = 0usize;

    for i in 0..height {
        match (time_ca.get(i), hr_ca.get(i), spo2_ca.get(i)) {
            (Some(t), Some(h), Some(s)) => {
                time.push(t);
                hr.push(h);
                spo2.push(s);
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("dropped {} incomplete rows when building time-series view", dropped);
    }

    Ok(TimeSeriesView { time, hr, spo2 })
}

/// Build a long-format view pairing the `period` label with one numeric
/// value column, row by row.
pub fn long_format_to_view(df: &DataFrame, value_col: &str) -> VitalsResult<LongFormatView> {
    let period_column = df.column(PERIOD_COL).map_err(|_| {
        VitalsError::Validation(format!("Missing column '{}'", PERIOD_COL))
    })?;
    let period_ca = period_column.str().map_err(|_| {
        VitalsError::Validation(format!("Column '{}' is not a string column", PERIOD_COL))
    })?;
    let values_ca = float_column(df, value_col)?;

    let height = df.height();
    let mut period = Vec::with_capacity(height);
    let mut values = Vec::with_capacity(height);

    for i in 0..height {
        let label = period_ca.get(i).ok_or_else(|| {
            VitalsError::Validation(format!("Null period label at row {}", i))
        })?;
        if let Some(v) = values_ca.get(i) {
            period.push(label.to_string());
            values.push(v);
        }
    }

    Ok(LongFormatView { period, values })
}

/// Serialize a view to JSON for a renderer in another process or language.
pub fn view_to_json<T: serde::Serialize>(view: &T) -> VitalsResult<String> {
    serde_json::to_string(view)
        .map_err(|e| VitalsError::Validation(format!("Failed to serialize view: {}", e)))
}

fn float_column<'a>(df: &'a DataFrame, name: &str) -> VitalsResult<&'a Float64Chunked> {
    df.column(name)
        .map_err(|_| VitalsError::Validation(format!("Missing column '{}'", name)))?
        .f64()
        .map_err(|_| VitalsError::Validation(format!("Column '{}' is not Float64", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            TIME_COL => [0.0, 1.0, 2.0, 3.0],
            HR_COL => [151.0, 153.0, 150.0, 148.0],
            SPO2_COL => [96.8, 97.1, 95.9, 96.4],
        )
        .unwrap()
    }

    #[test]
    fn test_numeric_column() {
        let df = sample_df();
        let hr = numeric_column(&df, HR_COL).unwrap();
        assert_eq!(hr, vec![151.0, 153.0, 150.0, 148.0]);

        let err = numeric_column(&df, "RESP").unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));
    }

    #[test]
    fn test_dataframe_to_timeseries() {
        let view = dataframe_to_timeseries(&sample_df()).unwrap();
        assert_eq!(view.time.len(), 4);
        assert_eq!(view.hr[1], 153.0);
        assert_eq!(view.spo2[3], 96.4);

        // Serializable for an external renderer
        let json = view_to_json(&view).unwrap();
        assert!(json.contains("\"hr\""));
    }

    #[test]
    fn test_long_format_to_view() {
        let df = df!(
            PERIOD_COL => ["24 weeks", "24 weeks", "34 weeks"],
            HR_COL => [151.0, 153.0, 162.0],
        )
        .unwrap();

        let view = long_format_to_view(&df, HR_COL).unwrap();
        assert_eq!(view.period, vec!["24 weeks", "24 weeks", "34 weeks"]);
        assert_eq!(view.values, vec![151.0, 153.0, 162.0]);
    }
}
