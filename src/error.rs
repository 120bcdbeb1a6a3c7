//! Error types for analysis operations.

/// Result type for analysis operations
pub type VitalsResult<T> = Result<T, VitalsError>;

/// Error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl From<polars::error::PolarsError> for VitalsError {
    fn from(e: polars::error::PolarsError) -> Self {
        VitalsError::DataFrame(e.to_string())
    }
}
