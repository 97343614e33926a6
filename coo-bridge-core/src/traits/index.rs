//! Integer types usable as sparse matrix indices
//!
//! Solver ABIs disagree on index width (32-bit Fortran integers, 64-bit
//! builds, unsigned offsets), so the derivation is generic over the index
//! type and never assumes `usize`.

/// Trait for integer types stored in leading and trailing index arrays
///
/// Every index type is plain old data, so derived arrays can be handed to
/// foreign code as raw bytes without conversion.
pub trait SparseIndex:
    bytemuck::Pod + Ord + core::fmt::Debug + core::hash::Hash + Send + Sync + 'static
{
    /// Largest value representable, saturated to `usize`
    const MAX_USIZE: usize;

    /// Convert from `usize` without a range check
    ///
    /// Callers must have checked the value against [`Self::MAX_USIZE`].
    fn from_usize(value: usize) -> Self;

    /// Convert to `usize` without a range check
    ///
    /// Negative signed values wrap to large positions, which bound checks
    /// then reject.
    fn to_usize(self) -> usize;

    /// Convert from `usize`, returning `None` when out of range
    fn checked_from_usize(value: usize) -> Option<Self> {
        if value <= Self::MAX_USIZE {
            Some(Self::from_usize(value))
        } else {
            None
        }
    }
}

macro_rules! impl_sparse_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SparseIndex for $ty {
                const MAX_USIZE: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn from_usize(value: usize) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_sparse_index!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_usize() {
        assert_eq!(<i32 as SparseIndex>::MAX_USIZE, i32::MAX as usize);
        assert_eq!(<u32 as SparseIndex>::MAX_USIZE, u32::MAX as usize);
        assert_eq!(<usize as SparseIndex>::MAX_USIZE, usize::MAX);
    }

    #[test]
    fn test_checked_from_usize() {
        assert_eq!(i32::checked_from_usize(7), Some(7i32));
        assert_eq!(i32::checked_from_usize(i32::MAX as usize), Some(i32::MAX));
        assert_eq!(i32::checked_from_usize(i32::MAX as usize + 1), None);
        assert_eq!(u64::checked_from_usize(42), Some(42u64));
    }

    #[test]
    fn test_round_trip_usize() {
        assert_eq!(5i64.to_usize(), 5);
        assert_eq!(i64::from_usize(5), 5i64);
        assert!((-1i32).to_usize() > i32::MAX as usize);
    }
}
