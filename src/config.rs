//! Analysis configuration file support.
//!
//! Reads analysis configuration from TOML: the input paths, the labeled
//! row windows to slice, and default summary parameters. Input locations
//! are configuration, never literals in code.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VitalsError, VitalsResult};

/// Analysis configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub input: InputSettings,
    #[serde(default)]
    pub slices: Vec<SliceSettings>,
    #[serde(default)]
    pub summary: SummarySettings,
}

/// Input file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Path to the vitals table (CSV, Parquet, or Arrow IPC).
    pub vitals_path: PathBuf,
    /// Optional path to a pre-serialized long-format table.
    #[serde(default)]
    pub long_format_path: Option<PathBuf>,
}

/// One labeled row window to slice out of the vitals table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceSettings {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Default parameters for summary derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    #[serde(default = "default_hr_bin_width")]
    pub hr_bin_width: f64,
    #[serde(default = "default_hr_domain_min")]
    pub hr_domain_min: f64,
    #[serde(default = "default_hr_domain_max")]
    pub hr_domain_max: f64,
    #[serde(default = "default_bandwidth_adjust")]
    pub bandwidth_adjust: f64,
}

fn default_hr_bin_width() -> f64 {
    2.0
}

fn default_hr_domain_min() -> f64 {
    50.0
}

fn default_hr_domain_max() -> f64 {
    250.0
}

fn default_bandwidth_adjust() -> f64 {
    1.0
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            hr_bin_width: default_hr_bin_width(),
            hr_domain_min: default_hr_domain_min(),
            hr_domain_max: default_hr_domain_max(),
            bandwidth_adjust: default_bandwidth_adjust(),
        }
    }
}

impl AnalysisConfig {
    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> VitalsResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| VitalsError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> VitalsResult<Self> {
        let config: AnalysisConfig = toml::from_str(text)
            .map_err(|e| VitalsError::Validation(format!("Invalid analysis config: {}", e)))?;

        for slice in &config.slices {
            if slice.start > slice.end {
                return Err(VitalsError::Validation(format!(
                    "slice '{}' has start {} greater than end {}",
                    slice.label, slice.start, slice.end
                )));
            }
        }
        if !(config.summary.hr_bin_width > 0.0) {
            return Err(VitalsError::Validation(
                "hr_bin_width must be positive".to_string(),
            ));
        }
        if config.summary.hr_domain_min >= config.summary.hr_domain_max {
            return Err(VitalsError::Validation(format!(
                "invalid HR domain [{}, {}]",
                config.summary.hr_domain_min, config.summary.hr_domain_max
            )));
        }

        Ok(config)
    }
}
