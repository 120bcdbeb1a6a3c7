use anyhow::{Context, Result};
use log::info;
use polars::prelude::*;
use std::path::Path;

use crate::io::loaders::VitalsLoader;
use crate::preprocessing::validator::{ValidationResult, VitalsValidator};

/// Result of preprocessing a vitals file
#[derive(Debug)]
pub struct PreprocessResult {
    pub dataframe: DataFrame,
    pub validation: ValidationResult,
    pub total_samples: usize,
}

/// Configuration for the preprocessing pipeline
pub struct PreprocessConfig {
    pub validate: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// One-call orchestration: load a vitals file, validate it, report.
pub struct AnalysisPipeline {
    config: PreprocessConfig,
}

impl AnalysisPipeline {
    /// Create a pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PreprocessConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Process a vitals file into a validated DataFrame
    pub fn process(&self, vitals_path: &Path) -> Result<PreprocessResult> {
        let loaded = VitalsLoader::load_from_file(vitals_path).with_context(|| {
            format!("Failed to load vitals table from {}", vitals_path.display())
        })?;

        let validation = if self.config.validate {
            VitalsValidator::validate_dataframe(&loaded.dataframe)
        } else {
            ValidationResult::new()
        };

        info!(
            "preprocessed {} samples ({} error(s), {} warning(s))",
            loaded.num_samples,
            validation.errors.len(),
            validation.warnings.len()
        );

        Ok(PreprocessResult {
            dataframe: loaded.dataframe,
            validation,
            total_samples: loaded.num_samples,
        })
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Process a vitals file with default configuration.
pub fn preprocess_vitals(path: &Path) -> Result<PreprocessResult> {
    AnalysisPipeline::new().process(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_process_temp_csv() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"TIME,HR,SPO2.PCT\n0,151,96.8\n1,153,97.1\n2,150,95.9\n")
            .unwrap();
        file.flush().unwrap();

        let result = preprocess_vitals(file.path()).unwrap();
        assert_eq!(result.total_samples, 3);
        assert!(result.validation.is_valid);
    }

    #[test]
    fn test_process_skips_validation_when_disabled() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        // SPO2 above 100 would raise a warning if validation ran
        file.write_all(b"TIME,HR,SPO2.PCT\n0,151,104.0\n").unwrap();
        file.flush().unwrap();

        let pipeline = AnalysisPipeline::with_config(PreprocessConfig { validate: false });
        let result = pipeline.process(file.path()).unwrap();
        assert!(result.validation.warnings.is_empty());
    }

    #[test]
    fn test_process_missing_file_has_context() {
        let err = preprocess_vitals(Path::new("/nonexistent/vitals.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to load vitals table"));
    }
}
