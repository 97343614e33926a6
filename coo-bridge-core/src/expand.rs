//! Derivation of per-nonzero coordinate indices from compressed arrays
//!
//! A coordinate index array is obtained in one of three ways, depending on
//! whether the trailing array already holds the requested axis and on the
//! requested index base:
//!
//! | trailing holds axis | base  | path                          |
//! |---------------------|-------|-------------------------------|
//! | yes                 | zero  | [`DerivationPath::PassThrough`] |
//! | yes                 | one   | [`DerivationPath::Shift`]       |
//! | no                  | any   | [`DerivationPath::Expand`]      |
//!
//! The kernels below write into a caller-owned buffer so the same
//! allocation can be reused across calls.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::error::{LayoutError, Result};
use crate::format::{Axis, IndexBase, Orientation};
#[cfg(feature = "alloc")]
use crate::traits::SparseIndex;

/// How a coordinate index array is obtained from compressed storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationPath {
    /// The trailing array is returned as is
    PassThrough,
    /// The trailing array is copied with the base offset added
    Shift,
    /// The leading array is expanded to one entry per nonzero
    Expand,
}

impl DerivationPath {
    /// Choose the derivation path for `axis` of a matrix in `orientation`
    pub const fn select(orientation: Orientation, axis: Axis, base: IndexBase) -> Self {
        if !axis.is_trailing_in(orientation) {
            DerivationPath::Expand
        } else if base.is_zero() {
            DerivationPath::PassThrough
        } else {
            DerivationPath::Shift
        }
    }

    /// True when the result aliases the matrix storage
    pub const fn is_zero_copy(&self) -> bool {
        matches!(self, DerivationPath::PassThrough)
    }
}

impl core::fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DerivationPath::PassThrough => write!(f, "pass-through"),
            DerivationPath::Shift => write!(f, "shift"),
            DerivationPath::Expand => write!(f, "expand"),
        }
    }
}

/// Expand a leading array into the major index of every stored nonzero
///
/// `out` is resized to `leading[major]` entries; entry `p` receives
/// `line + base` for the line whose range `leading[line]..leading[line + 1]`
/// contains `p`. Empty lines contribute nothing.
///
/// # Panics
///
/// Panics if the leading array is not non-decreasing. Run
/// [`crate::validation::validate_leading`] first when the layout is not
/// trusted.
#[cfg(feature = "alloc")]
pub fn expand_leading<I: SparseIndex>(leading: &[I], base: IndexBase, out: &mut Vec<I>) {
    let nnz = leading.last().map_or(0, |last| last.to_usize());
    out.resize(nnz, I::zeroed());

    let offset = base.offset();
    for (line, bounds) in leading.windows(2).enumerate() {
        let label = I::from_usize(line + offset);
        out[bounds[0].to_usize()..bounds[1].to_usize()].fill(label);
    }
}

/// Copy a trailing array into `out`, adding the base offset to every entry
///
/// Fails with [`LayoutError::IndexOverflow`] if a shifted entry does not
/// fit `I`; `out` then holds the entries shifted so far.
#[cfg(feature = "alloc")]
pub fn shift_trailing<I: SparseIndex>(
    trailing: &[I],
    base: IndexBase,
    out: &mut Vec<I>,
) -> Result<()> {
    let offset = base.offset();
    out.clear();
    out.reserve(trailing.len());
    for &index in trailing {
        let shifted = index
            .to_usize()
            .checked_add(offset)
            .and_then(I::checked_from_usize)
            .ok_or(LayoutError::IndexOverflow)?;
        out.push(shifted);
    }
    Ok(())
}
