use thiserror::Error;

/// Failures of the shell around the calculator (files, flags, CSV rows).
/// Computing benchmarks itself never produces one.
#[derive(Error, Debug)]
pub enum LexiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Board CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Calibration Error: {0}")]
    Config(String),

    #[error("Invalid Input: {0}")]
    Validation(String),
}

pub type LxResult<T> = Result<T, LexiError>;
