//! errors.rs - Custom error types for the taboo-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `taboo-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TabooError {
    /// The word list could not be opened.
    #[error("Word list '{}' could not be opened: {source}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the word list is not valid tabular text.
    #[error("Word list is malformed at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("Failed to compile term pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to serialize report: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl TabooError {
    /// Maps a CSV reader failure onto the loader's error kinds.
    ///
    /// I/O failures while reading stay I/O errors; everything else the CSV
    /// parser reports (bad UTF-8, broken records) is malformed input.
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => TabooError::Io(e),
            csv::ErrorKind::Utf8 { err, .. } => TabooError::MalformedInput {
                line,
                reason: format!("invalid UTF-8 in field {}: {}", err.field(), err),
            },
            other => TabooError::MalformedInput {
                line,
                reason: format!("{:?}", other),
            },
        }
    }
}
