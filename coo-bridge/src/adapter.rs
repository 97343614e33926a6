//! Coordinate-format adapter over compressed storage
//!
//! The adapter borrows a compressed matrix and hands out its contents as
//! row, column and value arrays. Index arrays the matrix already stores in
//! the requested form are returned without a copy; everything else is
//! derived into buffers the adapter owns.
//!
//! Derived arrays are rebuilt on every query. The adapter does not track
//! changes to the matrix, so a stale cache can never be observed.

use crate::config::{AdapterConfig, ValidationMode};
use crate::error::Result;
use crate::index_array::IndexArray;
use crate::triplets::CooTriplets;
use coo_bridge_core::validation::{check_representable, validate_full, validate_structure};
use coo_bridge_core::{
    expand_leading, shift_trailing, Axis, CompressedStorage, DerivationPath, IndexBase,
    SparseIndex,
};

/// Exposes a compressed matrix as coordinate triplets
///
/// # Example
///
/// ```
/// use coo_bridge::{CompressedMatrix, CooAdapter, Orientation};
///
/// let matrix = CompressedMatrix::<i32, f64>::new(
///     3,
///     3,
///     Orientation::RowMajor,
///     vec![0, 1, 2, 3],
///     vec![0, 1, 2],
///     vec![5.0, 6.0, 7.0],
/// )?;
///
/// let mut adapter = CooAdapter::new(&matrix);
/// assert_eq!(&*adapter.row_indices()?, &[1, 2, 3]);
///
/// adapter.set_one_indexed(false);
/// assert_eq!(&*adapter.col_indices()?, &[0, 1, 2]);
/// assert_eq!(adapter.values(), &[5.0, 6.0, 7.0]);
/// # Ok::<(), coo_bridge::AdapterError>(())
/// ```
#[derive(Debug)]
pub struct CooAdapter<'m, M: CompressedStorage> {
    matrix: &'m M,
    config: AdapterConfig,
    row_cache: Vec<M::Index>,
    col_cache: Vec<M::Index>,
}

impl<'m, M: CompressedStorage> CooAdapter<'m, M> {
    /// Create an adapter emitting one-based indices
    pub fn new(matrix: &'m M) -> Self {
        Self::with_config(matrix, AdapterConfig::default())
    }

    /// Create an adapter with an explicit configuration
    pub fn with_config(matrix: &'m M, config: AdapterConfig) -> Self {
        tracing::debug!(
            nrows = matrix.nrows(),
            ncols = matrix.ncols(),
            nnz = matrix.nnz(),
            orientation = %matrix.orientation(),
            base = %config.index_base,
            "binding coordinate adapter"
        );
        Self {
            matrix,
            config,
            row_cache: Vec::new(),
            col_cache: Vec::new(),
        }
    }

    /// The bound matrix
    pub fn matrix(&self) -> &'m M {
        self.matrix
    }

    /// Current configuration
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Number of stored nonzeros of the bound matrix
    pub fn nnz(&self) -> usize {
        self.matrix.nnz()
    }

    /// Base applied to the next row/column query
    pub fn index_base(&self) -> IndexBase {
        self.config.index_base
    }

    /// Change the base applied to the next row/column query
    pub fn set_index_base(&mut self, base: IndexBase) {
        if base != self.config.index_base {
            tracing::debug!(from = %self.config.index_base, to = %base, "index base changed");
        }
        self.config.index_base = base;
    }

    /// `true` selects one-based indices, `false` zero-based
    pub fn set_one_indexed(&mut self, one_indexed: bool) {
        self.set_index_base(IndexBase::from(one_indexed));
    }

    /// True when queries emit one-based indices
    pub fn is_one_indexed(&self) -> bool {
        !self.config.index_base.is_zero()
    }

    /// Row index of every stored nonzero, in storage order
    ///
    /// For a column-major matrix queried zero-based this is the matrix's
    /// own trailing array; otherwise the row cache is rebuilt.
    pub fn row_indices(&mut self) -> Result<IndexArray<'_, M::Index>> {
        self.validate()?;
        derive_axis(self.matrix, Axis::Row, &self.config, &mut self.row_cache)
    }

    /// Column index of every stored nonzero, in storage order
    ///
    /// For a row-major matrix queried zero-based this is the matrix's own
    /// trailing array; otherwise the column cache is rebuilt.
    pub fn col_indices(&mut self) -> Result<IndexArray<'_, M::Index>> {
        self.validate()?;
        derive_axis(self.matrix, Axis::Column, &self.config, &mut self.col_cache)
    }

    /// Stored values, straight from the matrix
    pub fn values(&self) -> &'m [M::Value] {
        self.matrix.values()
    }

    /// Derive both index arrays and pair them with the values
    pub fn triplets(&mut self) -> Result<CooTriplets<'_, M::Index, M::Value>> {
        self.validate()?;

        let matrix = self.matrix;
        let rows = derive_axis(matrix, Axis::Row, &self.config, &mut self.row_cache)?;
        let cols = derive_axis(matrix, Axis::Column, &self.config, &mut self.col_cache)?;

        Ok(CooTriplets::new(
            rows,
            cols,
            matrix.values(),
            self.config.index_base,
            matrix.dimensions(),
        ))
    }

    fn validate(&self) -> Result<()> {
        if self.config.validation == ValidationMode::Off {
            return Ok(());
        }

        let base = self.config.index_base;
        check_representable::<M::Index>(self.matrix.nrows(), base)?;
        check_representable::<M::Index>(self.matrix.ncols(), base)?;

        match self.config.validation {
            ValidationMode::Off => Ok(()),
            ValidationMode::Structure => Ok(validate_structure(self.matrix)?),
            ValidationMode::Full => Ok(validate_full(self.matrix)?),
        }
    }
}

fn derive_axis<'a, M: CompressedStorage>(
    matrix: &'a M,
    axis: Axis,
    config: &AdapterConfig,
    cache: &'a mut Vec<M::Index>,
) -> Result<IndexArray<'a, M::Index>> {
    let base = config.index_base;
    let path = DerivationPath::select(matrix.orientation(), axis, base);

    tracing::trace!(
        %axis,
        %path,
        nnz = matrix.nnz(),
        orientation = %matrix.orientation(),
        "deriving coordinate indices"
    );

    let array = match path {
        DerivationPath::PassThrough => IndexArray::Borrowed(matrix.trailing_indices()),
        DerivationPath::Shift => {
            shift_trailing(matrix.trailing_indices(), base, cache)?;
            IndexArray::Cached(cache.as_slice())
        }
        DerivationPath::Expand => {
            expand_into(matrix.leading_indices(), base, config, cache);
            IndexArray::Cached(cache.as_slice())
        }
    };
    Ok(array)
}

fn expand_into<I: SparseIndex>(
    leading: &[I],
    base: IndexBase,
    config: &AdapterConfig,
    cache: &mut Vec<I>,
) {
    #[cfg(feature = "parallel")]
    {
        use coo_bridge_core::format::constants::PARALLEL_CHUNK_LEN;

        let nnz = leading.last().map_or(0, |last| last.to_usize());
        if nnz >= config.parallel_threshold {
            crate::parallel::expand_leading_par(leading, base, PARALLEL_CHUNK_LEN, cache);
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    expand_leading(leading, base, cache);
}
