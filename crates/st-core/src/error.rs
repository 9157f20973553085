//! Core error type.
//!
//! Errors only arise while loading and validating configuration.  Nothing in
//! the per-tick path returns an error; sub-crates wrap `CoreError` in their own
//! enums via `#[from]`.

use thiserror::Error;

/// The top-level error type for `st-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for configuration loading.
pub type CoreResult<T> = Result<T, CoreError>;
