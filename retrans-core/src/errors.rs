//! errors.rs - Custom error types for the retrans-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error kinds surfaced by `retrans-core`.
///
/// Engine operations only ever return [`TransliterationError::PatternError`].
/// The remaining variants come from loading and validating mapping files.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransliterationError {
    #[error("Invalid substitution pattern '{pattern}': {source}")]
    PatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Mapping validation failed:\n{0}")]
    Validation(String),

    #[error("Unsupported mapping file format: {0}")]
    UnsupportedFormat(String),
}

impl TransliterationError {
    /// The offending pattern, if this is a pattern error.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TransliterationError::PatternError { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}
