//! Error types for the taxon library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TaxonError`] enum.
//!
//! # Examples
//!
//! ```
//! use taxon::error::{Result, TaxonError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TaxonError::unknown_category("missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for taxon operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the string-carrying
/// variants.
#[derive(Error, Debug)]
pub enum TaxonError {
    /// Train, untrain, or lookup with a category name that was not declared
    /// at construction. The category set is fixed; unknown names fail fast
    /// instead of silently creating a new category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Classification or prior computation before any category has received
    /// training. The prior is a share of total training volume, which is
    /// undefined when that volume is zero.
    #[error("Undefined prior: no category has received any training")]
    UndefinedPrior,

    /// Classifier constructed with an unusable category set.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (training sample files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`TaxonError`].
pub type Result<T> = std::result::Result<T, TaxonError>;

impl TaxonError {
    /// Create a new unknown-category error.
    pub fn unknown_category<S: Into<String>>(name: S) -> Self {
        TaxonError::UnknownCategory(name.into())
    }

    /// Create a new invalid-configuration error.
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        TaxonError::InvalidConfiguration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TaxonError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TaxonError::unknown_category("sports");
        assert_eq!(error.to_string(), "Unknown category: sports");

        let error = TaxonError::invalid_configuration("empty category set");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: empty category set"
        );

        let error = TaxonError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let taxon_error = TaxonError::from(io_error);

        match taxon_error {
            TaxonError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
