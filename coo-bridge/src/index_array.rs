//! Coordinate index views returned by the adapter

use coo_bridge_core::SparseIndex;
use std::ops::Deref;

/// Read-only view of a coordinate index array
///
/// `Borrowed` aliases the compressed matrix's own trailing array and lives
/// as long as the matrix borrow. `Cached` points into a buffer owned by the
/// adapter and is overwritten by the next query that derives into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexArray<'a, I> {
    /// Storage of the compressed matrix, returned without a copy
    Borrowed(&'a [I]),
    /// Buffer materialized by the adapter
    Cached(&'a [I]),
}

impl<'a, I: SparseIndex> IndexArray<'a, I> {
    /// The indices as a slice
    pub fn as_slice(&self) -> &'a [I] {
        match *self {
            IndexArray::Borrowed(slice) | IndexArray::Cached(slice) => slice,
        }
    }

    /// True when the view aliases the matrix storage
    pub fn is_borrowed(&self) -> bool {
        matches!(self, IndexArray::Borrowed(_))
    }

    /// Raw native-endian bytes of the indices, for handing to foreign code
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Pointer to the first index, valid for `len()` elements
    pub fn as_ptr(&self) -> *const I {
        self.as_slice().as_ptr()
    }

    /// Copy into an owned vector
    pub fn to_vec(&self) -> Vec<I> {
        self.as_slice().to_vec()
    }
}

impl<I: SparseIndex> Deref for IndexArray<'_, I> {
    type Target = [I];

    fn deref(&self) -> &[I] {
        self.as_slice()
    }
}

impl<I: SparseIndex> AsRef<[I]> for IndexArray<'_, I> {
    fn as_ref(&self) -> &[I] {
        self.as_slice()
    }
}
