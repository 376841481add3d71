//! Error types for freqtab-core.
//!
//! Tabulation itself cannot fail. Errors only arise at the input boundary,
//! when a caller hands over something that is not usable text, or when an
//! option value cannot be parsed.

use thiserror::Error;

/// The main error type for freqtab operations.
#[derive(Debug, Error)]
pub enum FreqTabError {
    /// The supplied value is not usable text (missing, or not valid UTF-8).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error parsing an option value such as a word rule name.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for freqtab operations.
pub type Result<T> = std::result::Result<T, FreqTabError>;
