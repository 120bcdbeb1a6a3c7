pub mod pipeline;
pub mod validator;

pub use pipeline::{preprocess_vitals, AnalysisPipeline, PreprocessConfig, PreprocessResult};
pub use validator::{ValidationResult, ValidationStats, VitalsValidator};
