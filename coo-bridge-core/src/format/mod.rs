//! Layout vocabulary shared by compressed and coordinate representations
//!
//! Pure type definitions: storage orientation, index base and the
//! constants the implementation crate tunes itself with.

pub mod constants;
pub mod layout;

pub use layout::{Axis, IndexBase, Orientation};
