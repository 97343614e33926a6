//! Orientation and index base definitions

use super::constants::ONE_BASED_OFFSET;

/// Which dimension the leading index array partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Leading array indexed by row, trailing array holds columns (CSR)
    RowMajor,
    /// Leading array indexed by column, trailing array holds rows (CSC)
    ColumnMajor,
}

impl Orientation {
    /// True for compressed sparse row storage
    pub const fn is_row_major(&self) -> bool {
        matches!(self, Orientation::RowMajor)
    }

    /// Split `(nrows, ncols)` into `(major, minor)` for this orientation
    pub const fn major_minor(&self, nrows: usize, ncols: usize) -> (usize, usize) {
        match self {
            Orientation::RowMajor => (nrows, ncols),
            Orientation::ColumnMajor => (ncols, nrows),
        }
    }
}

impl core::fmt::Display for Orientation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Orientation::RowMajor => write!(f, "CSR"),
            Orientation::ColumnMajor => write!(f, "CSC"),
        }
    }
}

/// Coordinate array selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row indices
    Row,
    /// Column indices
    Column,
}

impl Axis {
    /// True when the trailing array of `orientation` already holds this axis
    pub const fn is_trailing_in(&self, orientation: Orientation) -> bool {
        match self {
            Axis::Row => !orientation.is_row_major(),
            Axis::Column => orientation.is_row_major(),
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Label of the first row/column in coordinate output
///
/// Solvers with a Fortran heritage expect one-based indices, which is
/// why [`IndexBase::One`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexBase {
    /// First index is 0
    Zero,
    /// First index is 1
    #[default]
    One,
}

impl IndexBase {
    /// Offset added to a zero-based index
    pub const fn offset(&self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => ONE_BASED_OFFSET,
        }
    }

    /// True when no shift is applied
    pub const fn is_zero(&self) -> bool {
        matches!(self, IndexBase::Zero)
    }
}

impl From<bool> for IndexBase {
    /// `true` maps to one-based indexing
    fn from(one_indexed: bool) -> Self {
        if one_indexed {
            IndexBase::One
        } else {
            IndexBase::Zero
        }
    }
}

impl core::fmt::Display for IndexBase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-based", self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_major_minor() {
        assert_eq!(Orientation::RowMajor.major_minor(3, 5), (3, 5));
        assert_eq!(Orientation::ColumnMajor.major_minor(3, 5), (5, 3));
        assert!(Orientation::RowMajor.is_row_major());
        assert!(!Orientation::ColumnMajor.is_row_major());
    }

    #[test]
    fn test_axis_is_trailing_in() {
        assert!(Axis::Column.is_trailing_in(Orientation::RowMajor));
        assert!(!Axis::Row.is_trailing_in(Orientation::RowMajor));
        assert!(Axis::Row.is_trailing_in(Orientation::ColumnMajor));
        assert!(!Axis::Column.is_trailing_in(Orientation::ColumnMajor));
    }

    #[test]
    fn test_index_base() {
        assert_eq!(IndexBase::default(), IndexBase::One);
        assert_eq!(IndexBase::One.offset(), 1);
        assert_eq!(IndexBase::Zero.offset(), 0);
        assert_eq!(IndexBase::from(false), IndexBase::Zero);
        assert!(IndexBase::Zero.is_zero());
        assert!(!IndexBase::One.is_zero());
    }
}
