//! Error types for the propview plugin.
//!
//! This module defines the centralized error type [`PropviewError`] and a type alias
//! [`Result`] used throughout the crate. Filter input never produces an error:
//! malformed numbers are coerced to defaults in [`crate::domain::filter`]. The
//! variants here cover catalog loading, theme loading and configuration.

use thiserror::Error;

/// The main error type for propview operations.
///
/// # Examples
///
/// ```
/// use propview::domain::PropviewError;
///
/// fn validate_catalog() -> Result<(), PropviewError> {
///     Err(PropviewError::Catalog("duplicate property id 7".to_string()))
/// }
///
/// assert!(validate_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PropviewError {
    /// The catalog document violates a catalog invariant.
    ///
    /// Raised for duplicate ids, negative or non-finite prices and ROI values,
    /// and unsupported document versions.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog document could not be parsed as JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for propview operations.
pub type Result<T> = std::result::Result<T, PropviewError>;
