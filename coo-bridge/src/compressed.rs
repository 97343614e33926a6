//! Owned compressed sparse matrix
//!
//! A plain CSR/CSC container implementing [`CompressedStorage`]. The
//! adapter works with any implementor of the trait; this type exists so
//! callers without their own compressed matrix can build one from
//! coordinate entries.

use crate::error::{AdapterError, Result};
use coo_bridge_core::validation::{check_representable, validate_full};
use coo_bridge_core::{CompressedStorage, IndexBase, Orientation, SparseIndex};

/// Sparse matrix in compressed row or column layout
///
/// For a row-major matrix, `leading` has `nrows + 1` offsets and `trailing`
/// holds the column of every stored entry; column-major swaps the roles.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedMatrix<I, T> {
    nrows: usize,
    ncols: usize,
    orientation: Orientation,
    leading: Vec<I>,
    trailing: Vec<I>,
    values: Vec<T>,
}

impl<I: SparseIndex, T> CompressedMatrix<I, T> {
    /// Create a matrix from raw compressed arrays
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `trailing` and `values` differ in length
    /// - `leading` has the wrong length, does not start at 0, decreases,
    ///   or does not end at the nonzero count
    /// - any trailing index is outside the minor dimension
    pub fn new(
        nrows: usize,
        ncols: usize,
        orientation: Orientation,
        leading: Vec<I>,
        trailing: Vec<I>,
        values: Vec<T>,
    ) -> Result<Self> {
        if trailing.len() != values.len() {
            return Err(AdapterError::ShapeMismatch {
                what: "values",
                len: values.len(),
                expected: trailing.len(),
            });
        }

        let matrix = Self {
            nrows,
            ncols,
            orientation,
            leading,
            trailing,
            values,
        };
        validate_full(&matrix)?;
        Ok(matrix)
    }

    /// Create a matrix with no stored entries
    pub fn empty(nrows: usize, ncols: usize, orientation: Orientation) -> Self {
        let (major, _) = orientation.major_minor(nrows, ncols);
        Self {
            nrows,
            ncols,
            orientation,
            leading: vec![I::zeroed(); major + 1],
            trailing: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` entries
    ///
    /// Entries are grouped by major index with a stable counting sort, so
    /// within one row (or column) storage order follows input order.
    /// Duplicate coordinates are kept as separate stored entries.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        orientation: Orientation,
        entries: &[(usize, usize, T)],
    ) -> Result<Self>
    where
        T: Clone,
    {
        let (major, minor) = orientation.major_minor(nrows, ncols);
        let nnz = entries.len();

        I::checked_from_usize(nnz).ok_or(AdapterError::IndexOverflow { value: nnz })?;
        check_representable::<I>(minor, IndexBase::Zero)?;

        // Count entries per major line
        let mut offsets = vec![0usize; major + 1];
        for &(row, col, _) in entries {
            if row >= nrows || col >= ncols {
                return Err(AdapterError::EntryOutOfBounds {
                    row,
                    col,
                    nrows,
                    ncols,
                });
            }
            let (line, _) = orientation.major_minor(row, col);
            offsets[line + 1] += 1;
        }

        // Cumulative sum to get line starts
        for line in 0..major {
            offsets[line + 1] += offsets[line];
        }

        // Scatter entry positions into storage order
        let mut next = offsets.clone();
        let mut order = vec![0usize; nnz];
        for (position, &(row, col, _)) in entries.iter().enumerate() {
            let (line, _) = orientation.major_minor(row, col);
            order[next[line]] = position;
            next[line] += 1;
        }

        let trailing = order
            .iter()
            .map(|&position| {
                let (row, col, _) = entries[position];
                I::from_usize(orientation.major_minor(row, col).1)
            })
            .collect();
        let values = order
            .iter()
            .map(|&position| entries[position].2.clone())
            .collect();

        Ok(Self {
            nrows,
            ncols,
            orientation,
            leading: offsets.into_iter().map(I::from_usize).collect(),
            trailing,
            values,
        })
    }

    /// Re-compress the same entries in another orientation
    pub fn to_orientation(&self, orientation: Orientation) -> Result<Self>
    where
        T: Clone,
    {
        if orientation == self.orientation {
            return Ok(self.clone());
        }

        tracing::debug!(
            from = %self.orientation,
            to = %orientation,
            nnz = self.nnz(),
            "recompressing matrix"
        );

        let entries: Vec<(usize, usize, T)> = self
            .entries()
            .map(|(row, col, value)| (row, col, value.clone()))
            .collect();
        Self::from_triplets(self.nrows, self.ncols, orientation, &entries)
    }

    /// Iterate stored entries as zero-based `(row, col, &value)` in storage order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let orientation = self.orientation;
        self.leading
            .windows(2)
            .enumerate()
            .flat_map(move |(line, bounds)| {
                (bounds[0].to_usize()..bounds[1].to_usize()).map(move |position| {
                    let minor = self.trailing[position].to_usize();
                    let (row, col) = orientation.major_minor(line, minor);
                    (row, col, &self.values[position])
                })
            })
    }

    /// Mutable access to the stored values; the sparsity pattern is fixed
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Split into `(leading, trailing, values)`
    pub fn into_parts(self) -> (Vec<I>, Vec<I>, Vec<T>) {
        (self.leading, self.trailing, self.values)
    }
}

impl<I: SparseIndex, T> CompressedStorage for CompressedMatrix<I, T> {
    type Index = I;
    type Value = T;

    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn leading_indices(&self) -> &[I] {
        &self.leading
    }

    fn trailing_indices(&self) -> &[I] {
        &self.trailing
    }

    fn values(&self) -> &[T] {
        &self.values
    }
}
