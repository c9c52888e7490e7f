//! Error types for the geometric core.
//!
//! Only contract violations on the pure functions are errors. Malformed file
//! records, missing piece geometry and degenerate polygons are handled in place
//! (skipped, reported as a diagnostic, or answered with a defined fallback).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NestError {
    /// A required input was empty or out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NestError>;
