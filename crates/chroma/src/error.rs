//! Error types for markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing a color literal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Not exactly six hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
