//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `WaError` into them
//! via `From` impls.

use thiserror::Error;

/// The top-level error type for `wa-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `wa-*` crates.
pub type WaResult<T> = Result<T, WaError>;
