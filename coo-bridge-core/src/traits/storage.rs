//! Capability trait for compressed sparse matrices
//!
//! The derivation never needs to mutate a matrix or its sparsity pattern,
//! so the capability is read-only.

use super::index::SparseIndex;
use crate::format::Orientation;

/// Read-only view of a matrix stored in CSR or CSC layout
///
/// Implementors promise nothing beyond returning their arrays; layout
/// invariants are checked by [`crate::validation`] when requested.
pub trait CompressedStorage {
    /// Integer type of the leading and trailing arrays
    type Index: SparseIndex;

    /// Stored element type
    type Value;

    /// Number of rows
    fn nrows(&self) -> usize;

    /// Number of columns
    fn ncols(&self) -> usize;

    /// Storage orientation
    fn orientation(&self) -> Orientation;

    /// Offsets into the trailing array, one per major line plus one
    fn leading_indices(&self) -> &[Self::Index];

    /// Minor index of every stored nonzero
    fn trailing_indices(&self) -> &[Self::Index];

    /// Stored values, parallel to the trailing array
    fn values(&self) -> &[Self::Value];

    /// Number of stored nonzeros
    fn nnz(&self) -> usize {
        self.trailing_indices().len()
    }

    /// True when the leading array partitions rows
    fn is_row_major(&self) -> bool {
        self.orientation().is_row_major()
    }

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Length of the dimension the leading array indexes
    fn major_dim(&self) -> usize {
        self.orientation().major_minor(self.nrows(), self.ncols()).0
    }

    /// Length of the dimension the trailing array indexes
    fn minor_dim(&self) -> usize {
        self.orientation().major_minor(self.nrows(), self.ncols()).1
    }
}
