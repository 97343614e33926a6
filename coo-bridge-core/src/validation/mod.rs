//! Layout validation for compressed storage
//!
//! Pure checks over index slices with no allocation. Structural checks
//! cost O(major); bound checks cost O(nnz).

pub mod layout;

pub use layout::{
    check_representable, validate_full, validate_leading, validate_structure,
    validate_trailing_bounds,
};
