//! Vitals data validation with error and warning reporting.
//!
//! Validates a loaded vitals table for completeness and plausibility:
//! required columns, null samples, physiologically implausible values, and
//! time-ordering problems.

use log::warn;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::parsing::table_parser::{HR_COL, REQUIRED_COLUMNS, SPO2_COL, TIME_COL};

/// Plausible heart-rate ceiling in beats/min; values above it are flagged.
const HR_MAX_PLAUSIBLE: f64 = 300.0;

/// Validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false; warnings are informational and don't fail
/// validation.
///
/// # Examples
///
/// ```
/// use nicu_vitals::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Missing required column: HR".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_samples: usize,
    pub missing_hr: usize,
    pub missing_spo2: usize,
    pub hr_out_of_range: usize,
    pub spo2_out_of_range: usize,
    pub time_order_violations: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    ///
    /// ```
    /// use nicu_vitals::preprocessing::validator::ValidationResult;
    ///
    /// let mut result = ValidationResult::new();
    /// result.add_warning("3 samples have SPO2.PCT above 100".to_string());
    /// assert!(result.is_valid);
    /// assert_eq!(result.warnings.len(), 1);
    /// ```
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for loaded vitals tables
pub struct VitalsValidator;

impl VitalsValidator {
    /// Validate a vitals DataFrame for completeness and plausibility.
    ///
    /// Missing required columns are errors; implausible values and
    /// out-of-order timestamps are warnings.
    pub fn validate_dataframe(df: &DataFrame) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_samples = df.height();

        let column_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        for name in REQUIRED_COLUMNS {
            if !column_names.contains(&name.to_string()) {
                result.add_error(format!("Missing required column: {}", name));
            }
        }
        if !result.is_valid {
            return result;
        }

        Self::check_hr(df, &mut result);
        Self::check_spo2(df, &mut result);
        Self::check_time_order(df, &mut result);

        if !result.warnings.is_empty() {
            warn!(
                "vitals validation raised {} warning(s) over {} samples",
                result.warnings.len(),
                result.stats.total_samples
            );
        }

        result
    }

    fn check_hr(df: &DataFrame, result: &mut ValidationResult) {
        let Some(hr) = df.column(HR_COL).ok().and_then(|c| c.f64().ok()) else {
            result.add_error(format!("Column '{}' is not Float64", HR_COL));
            return;
        };

        result.stats.missing_hr = hr.null_count();
        if result.stats.missing_hr > 0 {
            result.add_warning(format!(
                "{} samples have missing {}",
                result.stats.missing_hr, HR_COL
            ));
        }

        let out_of_range = hr
            .into_iter()
            .flatten()
            .filter(|v| *v <= 0.0 || *v > HR_MAX_PLAUSIBLE)
            .count();
        result.stats.hr_out_of_range = out_of_range;
        if out_of_range > 0 {
            result.add_warning(format!(
                "{} samples have implausible {} values",
                out_of_range, HR_COL
            ));
        }
    }

    fn check_spo2(df: &DataFrame, result: &mut ValidationResult) {
        let Some(spo2) = df.column(SPO2_COL).ok().and_then(|c| c.f64().ok()) else {
            result.add_error(format!("Column '{}' is not Float64", SPO2_COL));
            return;
        };

        result.stats.missing_spo2 = spo2.null_count();
        if result.stats.missing_spo2 > 0 {
            result.add_warning(format!(
                "{} samples have missing {}",
                result.stats.missing_spo2, SPO2_COL
            ));
        }

        let out_of_range = spo2
            .into_iter()
            .flatten()
            .filter(|v| !(0.0..=100.0).contains(v))
            .count();
        result.stats.spo2_out_of_range = out_of_range;
        if out_of_range > 0 {
            result.add_warning(format!(
                "{} samples have {} outside [0, 100]",
                out_of_range, SPO2_COL
            ));
        }
    }

    fn check_time_order(df: &DataFrame, result: &mut ValidationResult) {
        let Some(time) = df.column(TIME_COL).ok().and_then(|c| c.f64().ok()) else {
            result.add_error(format!("Column '{}' is not Float64", TIME_COL));
            return;
        };

        let mut violations = 0usize;
        let mut prev: Option<f64> = None;
        for value in time.into_iter().flatten() {
            if let Some(p) = prev {
                if value < p {
                    violations += 1;
                }
            }
            prev = Some(value);
        }

        result.stats.time_order_violations = violations;
        if violations > 0 {
            result.add_warning(format!(
                "{} samples are out of chronological order",
                violations
            ));
        }
    }
}
