//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `GsError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `gs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `gs-*` crates.
pub type GsResult<T> = Result<T, GsError>;
