//! COO Bridge - coordinate views of compressed sparse matrices
//!
//! Direct solvers commonly take their input as three parallel arrays (row
//! indices, column indices, values), often one-based. This library exposes
//! any CSR or CSC matrix in that form, copying only what has to change.
//!
//! ## Architecture
//!
//! COO Bridge is split into a `no_std` core and a std implementation:
//!
//! - **coo-bridge-core**: index types, the storage capability trait, layout
//!   checks and derivation kernels (`no_std`)
//! - **coo-bridge**: the adapter, an owned compressed matrix, configuration
//!   and parallel expansion
//!
//! ## Quick Start
//!
//! ```rust
//! use coo_bridge::{CompressedMatrix, CooAdapter, Orientation};
//!
//! fn example() -> coo_bridge::Result<()> {
//!     let entries = [(0, 0, 4.0), (1, 0, -1.0), (1, 1, 4.0), (2, 2, 2.0)];
//!     let matrix =
//!         CompressedMatrix::<i32, f64>::from_triplets(3, 3, Orientation::ColumnMajor, &entries)?;
//!
//!     // One-based by default, as Fortran-heritage solvers expect
//!     let mut adapter = CooAdapter::new(&matrix);
//!     let triplets = adapter.triplets()?;
//!     for (row, col, value) in triplets.iter() {
//!         println!("A({row}, {col}) = {value}");
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Zero-copy pass-through**: indices already stored in the right form are
//!   returned as borrowed views of the matrix
//! - **Parallel expansion** (`parallel`): large leading arrays are expanded on
//!   the rayon pool
//! - **Serde** (`serde`): configuration and snapshots load from / dump to JSON

// Re-export core abstractions
pub use coo_bridge_core::{
    // Core traits
    CompressedStorage, SparseIndex,
    // Layout vocabulary
    Axis, DerivationPath, IndexBase, Orientation,
    // Error handling
    ErrorCategory, LayoutError,
};

// Implementation modules
pub mod adapter;
pub mod compressed;
pub mod config;
pub mod error;
pub mod index_array;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod triplets;

// Public exports
pub use adapter::CooAdapter;
pub use compressed::CompressedMatrix;
pub use config::{AdapterConfig, ValidationMode};
pub use error::{AdapterError, Result};
pub use index_array::IndexArray;
pub use triplets::{CooBuffers, CooTriplets};
