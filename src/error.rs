//! Error types for the wage supplement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during supplement calculation.

use thiserror::Error;

/// The main error type for the wage supplement engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use crewplan_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A work interval was invalid (e.g. end before start).
    #[error("Invalid work interval: {message}")]
    InvalidInterval {
        /// A description of what made the interval invalid.
        message: String,
    },

    /// A supplement rule contained inconsistent data.
    #[error("Invalid supplement rule '{rule}': {message}")]
    InvalidRule {
        /// The name of the invalid rule.
        rule: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A supplement category value was not recognized.
    ///
    /// Raised at the configuration or API boundary so that calling code can
    /// alert an administrator instead of silently skipping the rule.
    #[error("Unknown supplement category: {category}")]
    UnknownCategory {
        /// The category value that was not recognized.
        category: String,
    },

    /// A supplement kind value was not recognized.
    #[error("Unknown supplement kind: {kind}")]
    UnknownKind {
        /// The kind value that was not recognized.
        kind: String,
    },

    /// A year outside the representable calendar range.
    #[error("Year out of supported range: {year}")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
