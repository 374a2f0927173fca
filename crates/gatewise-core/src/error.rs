//! # Error Hierarchy
//!
//! Structured error types for the Gatewise workspace, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! These errors cover programmer-facing failures only: malformed timestamp
//! strings, text that does not appear in a closed label table. Business
//! outcomes of a login attempt (bad credentials, locked account, and so on)
//! are data carried by `LoginOutcome`, never `Err`.

use thiserror::Error;

/// Top-level error type for the Gatewise workspace.
#[derive(Error, Debug)]
pub enum GatewiseError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for domain primitives.
///
/// Each error carries the invalid input and enough context to diagnose
/// the rejection without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Timestamp string is not valid UTC ISO 8601.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Rendered text does not appear in the closed table for the named kind.
    #[error("unknown {kind}: {value:?}")]
    UnknownLabel {
        /// Which fixed table was consulted (e.g. `"redirect target"`).
        kind: &'static str,
        /// The text that matched no entry.
        value: String,
    },
}
