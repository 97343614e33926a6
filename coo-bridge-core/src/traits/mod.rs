//! Abstract interfaces for compressed sparse storage
//!
//! Pure interfaces with no concrete matrices: the index types the
//! derivation works over and the capability a compressed matrix exposes.

pub mod index;
pub mod storage;

pub use index::SparseIndex;
pub use storage::CompressedStorage;
