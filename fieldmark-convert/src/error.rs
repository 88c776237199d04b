//! Error types for conversion operations
//!
//! The transforms themselves never fail: garbage input degrades to literal
//! text. Errors only exist at the registry seam, where a caller can ask for a
//! direction that is not registered.

use std::fmt;

/// Errors that can occur while selecting a conversion direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No registered direction matches the requested source/target pair
    DirectionNotFound(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::DirectionNotFound(name) => {
                write!(f, "Conversion direction '{name}' not found")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
