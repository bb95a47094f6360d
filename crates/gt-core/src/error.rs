//! Core error type.
//!
//! The tick loop itself never returns errors — malformed lookups fail open
//! and exhausted searches fall back to defaults.  Errors exist only at the
//! assembly boundary (configuration validation) and are wrapped by the
//! higher-level crates' own enums via `From`.

use thiserror::Error;

/// Errors raised by `gt-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
