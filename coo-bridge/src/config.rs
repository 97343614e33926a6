//! Adapter configuration

use crate::error::{AdapterError, Result};
use coo_bridge_core::format::constants::DEFAULT_PARALLEL_THRESHOLD;
use coo_bridge_core::IndexBase;

/// How much of the compressed layout is checked before each derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationMode {
    /// Trust the layout; a malformed matrix panics inside the kernels
    Off,
    /// Check array lengths and the leading array, O(major)
    #[default]
    Structure,
    /// Also bound-check every trailing index, O(nnz)
    Full,
}

/// Configuration for coordinate index derivation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdapterConfig {
    /// Base of the emitted row and column indices
    pub index_base: IndexBase,
    /// Layout checks run on every query
    pub validation: ValidationMode,
    /// Nonzero count from which expansion runs on the rayon pool
    pub parallel_threshold: usize,
}

impl AdapterConfig {
    /// Config emitting zero-based indices
    pub fn zero_based() -> Self {
        Self::default().with_index_base(IndexBase::Zero)
    }

    /// Set the index base
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    /// Set the validation mode
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Set the parallel expansion threshold
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Parse a config from JSON; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AdapterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the adapter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(AdapterError::Config(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            index_base: IndexBase::One,
            validation: ValidationMode::Structure,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
