//! # Error Types
//!
//! This module defines the error type used throughout the pricetag library.
//! Every variant is recoverable: callers report it and carry on.

use thiserror::Error;

/// Main error type for pricetag operations
#[derive(Debug, Error)]
pub enum PricetagError {
    /// No catalog entry matches the code
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Drawing surface or selected product unavailable
    #[error("Render error: {0}")]
    Render(String),

    /// PNG encoding, file write or print hand-off failed
    #[error("Export error: {0}")]
    Export(String),

    /// Malformed catalog source or duplicate key
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Font file could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
