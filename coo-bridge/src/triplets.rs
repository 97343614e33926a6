//! Coordinate triplets ready for a solver call

use crate::error::{AdapterError, Result};
use crate::index_array::IndexArray;
use coo_bridge_core::{IndexBase, SparseIndex};

/// Row, column and value arrays describing the same stored nonzeros
///
/// Position `i` of the three arrays is one stored entry. Produced by
/// [`crate::CooAdapter::triplets`]; the views stay valid until the adapter
/// is queried again.
#[derive(Debug, Clone, Copy)]
pub struct CooTriplets<'a, I, T> {
    rows: IndexArray<'a, I>,
    cols: IndexArray<'a, I>,
    values: &'a [T],
    base: IndexBase,
    nrows: usize,
    ncols: usize,
}

impl<'a, I: SparseIndex, T> CooTriplets<'a, I, T> {
    pub(crate) fn new(
        rows: IndexArray<'a, I>,
        cols: IndexArray<'a, I>,
        values: &'a [T],
        base: IndexBase,
        dimensions: (usize, usize),
    ) -> Self {
        debug_assert_eq!(rows.len(), values.len());
        debug_assert_eq!(cols.len(), values.len());
        Self {
            rows,
            cols,
            values,
            base,
            nrows: dimensions.0,
            ncols: dimensions.1,
        }
    }

    /// Row index of every entry
    pub fn rows(&self) -> IndexArray<'a, I> {
        self.rows
    }

    /// Column index of every entry
    pub fn cols(&self) -> IndexArray<'a, I> {
        self.cols
    }

    /// Value of every entry
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Base the row and column indices are expressed in
    pub fn base(&self) -> IndexBase {
        self.base
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries as `(row, col, &value)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (I, I, &'a T)> + 'a {
        let rows = self.rows.as_slice();
        let cols = self.cols.as_slice();
        rows.iter()
            .zip(cols)
            .zip(self.values)
            .map(|((&row, &col), value)| (row, col, value))
    }

    /// Copy the three arrays into an owned snapshot
    pub fn to_buffers(&self) -> CooBuffers<I, T>
    where
        T: Clone,
    {
        CooBuffers {
            nrows: self.nrows,
            ncols: self.ncols,
            base: self.base,
            rows: self.rows.to_vec(),
            cols: self.cols.to_vec(),
            values: self.values.to_vec(),
        }
    }
}

/// Owned coordinate arrays, detached from the adapter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooBuffers<I, T> {
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
    /// Base of `rows` and `cols`
    pub base: IndexBase,
    /// Row index of every entry
    pub rows: Vec<I>,
    /// Column index of every entry
    pub cols: Vec<I>,
    /// Value of every entry
    pub values: Vec<T>,
}

impl<I: SparseIndex, T: Clone> CooBuffers<I, T> {
    /// Entries as zero-based `(row, col, value)`, undoing the base offset
    ///
    /// # Errors
    ///
    /// Returns an error if the three arrays differ in length, or if an
    /// index lies below the base or outside the matrix. Buffers built by
    /// [`CooTriplets::to_buffers`] always pass; deserialized ones may not.
    pub fn to_zero_based_entries(&self) -> Result<Vec<(usize, usize, T)>> {
        for (what, len) in [("cols", self.cols.len()), ("values", self.values.len())] {
            if len != self.rows.len() {
                return Err(AdapterError::ShapeMismatch {
                    what,
                    len,
                    expected: self.rows.len(),
                });
            }
        }

        let offset = self.base.offset();
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&row, &col), value)| {
                let (row, col) = (row.to_usize(), col.to_usize());
                match (row.checked_sub(offset), col.checked_sub(offset)) {
                    (Some(r), Some(c)) if r < self.nrows && c < self.ncols => {
                        Ok((r, c, value.clone()))
                    }
                    _ => Err(AdapterError::EntryOutOfBounds {
                        row,
                        col,
                        nrows: self.nrows,
                        ncols: self.ncols,
                    }),
                }
            })
            .collect()
    }
}

#[cfg(feature = "serde")]
impl<I: serde::Serialize, T: serde::Serialize> CooBuffers<I, T> {
    /// Serialize the snapshot as JSON, e.g. to log a failing solver input
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AdapterError::Serialization(e.to_string()))
    }
}
