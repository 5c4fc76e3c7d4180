//! Core error type.
//!
//! Sub-crates may define their own error enums and convert `CoreError` into
//! them via `From` impls, or keep them separate and wrap `CoreError` as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `epi-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
