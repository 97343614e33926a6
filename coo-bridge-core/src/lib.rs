#![no_std]

//! COO Bridge Core - compressed to coordinate index definitions
//!
//! This crate provides the vocabulary, capability trait, layout checks and
//! derivation kernels for exposing CSR/CSC storage as coordinate triplets.
//! It performs no I/O and allocates only behind the `alloc` feature.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod expand;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use expand::DerivationPath;
#[cfg(feature = "alloc")]
pub use expand::{expand_leading, shift_trailing};
pub use format::*;
pub use traits::*;
