//! Tuning constants for index derivation

/// Nonzero count above which expansion may be split across threads
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Number of nonzeros handled by one parallel expansion task
pub const PARALLEL_CHUNK_LEN: usize = 1 << 14;

/// Offset added to every index in one-based output
pub const ONE_BASED_OFFSET: usize = 1;
