//! Structural and bound checks for leading/trailing index arrays

use crate::error::{LayoutError, Result};
use crate::format::IndexBase;
use crate::traits::{CompressedStorage, SparseIndex};

/// Validate a leading (offset) array against its major dimension
///
/// The array must hold `major + 1` entries, start at zero, never
/// decrease, and end at `nnz`.
pub fn validate_leading<I: SparseIndex>(leading: &[I], major: usize, nnz: usize) -> Result<()> {
    if leading.len() != major + 1 {
        return Err(LayoutError::LeadingLength);
    }

    if leading[0].to_usize() != 0 {
        return Err(LayoutError::LeadingStart);
    }

    if leading.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(LayoutError::LeadingNotSorted);
    }

    if leading[major].to_usize() != nnz {
        return Err(LayoutError::LeadingEnd);
    }

    Ok(())
}

/// Validate that every trailing index lies inside the minor dimension
pub fn validate_trailing_bounds<I: SparseIndex>(trailing: &[I], minor: usize) -> Result<()> {
    if trailing.iter().any(|&index| index.to_usize() >= minor) {
        return Err(LayoutError::IndexOutOfBounds);
    }
    Ok(())
}

/// Check that the largest index of a dimension survives the base shift
///
/// A dimension of extent `n` produces indices up to `n - 1 + offset`,
/// which must fit the index type.
pub fn check_representable<I: SparseIndex>(extent: usize, base: IndexBase) -> Result<()> {
    if extent == 0 {
        return Ok(());
    }

    let largest = (extent - 1)
        .checked_add(base.offset())
        .ok_or(LayoutError::IndexOverflow)?;

    if largest > I::MAX_USIZE {
        return Err(LayoutError::IndexOverflow);
    }

    Ok(())
}

/// Validate array lengths and the leading array of a compressed matrix
pub fn validate_structure<S: CompressedStorage + ?Sized>(storage: &S) -> Result<()> {
    let trailing = storage.trailing_indices();
    let nnz = storage.nnz();

    if trailing.len() != nnz {
        return Err(LayoutError::TrailingLength);
    }

    if storage.values().len() != nnz {
        return Err(LayoutError::ValuesLength);
    }

    validate_leading(storage.leading_indices(), storage.major_dim(), nnz)
}

/// Structural validation plus bound checks on every trailing index
pub fn validate_full<S: CompressedStorage + ?Sized>(storage: &S) -> Result<()> {
    validate_structure(storage)?;
    validate_trailing_bounds(storage.trailing_indices(), storage.minor_dim())
}
