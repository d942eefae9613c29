//! Error types for gs-output.

use thiserror::Error;

/// Errors that can occur when writing or reading the result table.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed result table at line {line}: {message}")]
    Parse { line: u64, message: String },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
