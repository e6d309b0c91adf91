//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or checking fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture or failures file is not valid TOML for its schema.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A fixture file or directory could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture ran but did not meet its expectations.
    #[error("expectation failed: {message}")]
    Expectation { message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
