//! Error types for compressed layout checks

/// Errors raised when a compressed layout breaks its structural invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Leading array length is not `major + 1`
    LeadingLength,
    /// Leading array does not start at zero
    LeadingStart,
    /// Leading array decreases somewhere
    LeadingNotSorted,
    /// Last leading entry differs from the stored nonzero count
    LeadingEnd,
    /// Trailing array length differs from the stored nonzero count
    TrailingLength,
    /// Values array length differs from the trailing array length
    ValuesLength,
    /// A trailing index is outside the minor dimension
    IndexOutOfBounds,
    /// An index does not fit the target index type
    IndexOverflow,
}

/// Coarse classification of [`LayoutError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Array lengths or ordering are inconsistent
    Structure,
    /// An index points outside the matrix
    Bounds,
    /// An index cannot be represented
    Overflow,
}

impl LayoutError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            LayoutError::LeadingLength
            | LayoutError::LeadingStart
            | LayoutError::LeadingNotSorted
            | LayoutError::LeadingEnd
            | LayoutError::TrailingLength
            | LayoutError::ValuesLength => ErrorCategory::Structure,
            LayoutError::IndexOutOfBounds => ErrorCategory::Bounds,
            LayoutError::IndexOverflow => ErrorCategory::Overflow,
        }
    }
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            LayoutError::LeadingLength => "Leading index array has the wrong length",
            LayoutError::LeadingStart => "Leading index array does not start at zero",
            LayoutError::LeadingNotSorted => "Leading index array is not non-decreasing",
            LayoutError::LeadingEnd => "Leading index array does not end at the nonzero count",
            LayoutError::TrailingLength => "Trailing index array length differs from nonzero count",
            LayoutError::ValuesLength => "Values array length differs from nonzero count",
            LayoutError::IndexOutOfBounds => "Trailing index out of bounds",
            LayoutError::IndexOverflow => "Index does not fit the index type",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for LayoutError {}

/// Result type for layout operations
pub type Result<T> = core::result::Result<T, LayoutError>;
