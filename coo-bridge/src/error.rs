//! Error type for adapter and matrix construction

use coo_bridge_core::LayoutError;
use thiserror::Error;

/// Errors raised by the adapter and by [`crate::CompressedMatrix`] construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The compressed layout breaks a structural invariant
    #[error("Invalid compressed layout: {0}")]
    Layout(#[from] LayoutError),

    /// Array lengths disagree during construction
    #[error("Shape mismatch: {what} has length {len}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        len: usize,
        expected: usize,
    },

    /// A coordinate entry lies outside the matrix
    #[error("Entry ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")]
    EntryOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },

    /// A dimension or offset does not fit the index type
    #[error("Value {value} does not fit the index type")]
    IndexOverflow { value: usize },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A snapshot could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
