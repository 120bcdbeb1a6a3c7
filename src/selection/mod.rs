//! Contiguous row-range selection over a loaded table.
//!
//! Selections are half-open offset intervals `[start, end)`. Polars columns
//! are copy-on-write, so a returned selection is an independent value: it
//! holds no live link back to the source frame.

use polars::prelude::*;

use crate::error::{VitalsError, VitalsResult};

/// Extract rows `[start, end)` from `df` as an independent sub-table.
///
/// `start == end` is valid and yields an empty frame. Fails with a range
/// error when `start > end` or `end` exceeds the row count. Negative
/// offsets are unrepresentable in this API.
pub fn select_range(df: &DataFrame, start: usize, end: usize) -> VitalsResult<DataFrame> {
    let height = df.height();

    if start > end {
        return Err(VitalsError::Range(format!(
            "start {} is greater than end {}",
            start, end
        )));
    }
    if end > height {
        return Err(VitalsError::Range(format!(
            "end {} is out of bounds for a table of {} rows",
            end, height
        )));
    }

    Ok(df.slice(start as i64, end - start))
}
