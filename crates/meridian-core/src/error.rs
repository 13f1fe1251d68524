//! # Error Types
//!
//! The error type for `meridian-core` primitives, using `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! The completion engine has no failure modes — missing stage, missing
//! section data, and blank values all resolve to "not provided", never to
//! an error — and the only fallible operation in this crate is timestamp
//! parsing. The other edges own their error types where they occur:
//! `ConfigError` (load-time validation), `ObligationError` (double
//! filing), and `StoreError` (lookup miss).

use thiserror::Error;

/// Error raised by `meridian-core` primitives.
#[derive(Error, Debug)]
pub enum MeridianError {
    /// A timestamp string could not be parsed or was not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
