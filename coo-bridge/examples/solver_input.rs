//! Prepare coordinate input for a direct solver
//!
//! Builds a small tridiagonal system in CSC layout, then prints the three
//! arrays a one-based solver would receive and the zero-based view a C
//! solver would use.
//!
//! Run with `RUST_LOG=coo_bridge=trace` to see which derivation path each
//! query takes.

use coo_bridge::{
    AdapterConfig, CompressedMatrix, CooAdapter, IndexBase, Orientation, ValidationMode,
};
use tracing_subscriber::EnvFilter;

fn tridiagonal(n: usize) -> Vec<(usize, usize, f64)> {
    let mut entries = Vec::with_capacity(3 * n);
    for i in 0..n {
        if i > 0 {
            entries.push((i, i - 1, -1.0));
        }
        entries.push((i, i, 2.0));
        if i + 1 < n {
            entries.push((i, i + 1, -1.0));
        }
    }
    entries
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n = 5;
    let entries = tridiagonal(n);
    let matrix =
        CompressedMatrix::<i32, f64>::from_triplets(n, n, Orientation::ColumnMajor, &entries)?;

    let config = AdapterConfig::default().with_validation(ValidationMode::Full);
    let mut adapter = CooAdapter::with_config(&matrix, config);

    {
        let triplets = adapter.triplets()?;
        println!("{n}x{n} system, {} entries, {}", triplets.len(), triplets.base());
        println!("  IRN = {:?}", triplets.rows().as_slice());
        println!("  JCN = {:?}", triplets.cols().as_slice());
        println!("  A   = {:?}", triplets.values());
        println!(
            "  row array zero-copy: {}, column array zero-copy: {}",
            triplets.rows().is_borrowed(),
            triplets.cols().is_borrowed()
        );
    }

    adapter.set_index_base(IndexBase::Zero);
    let triplets = adapter.triplets()?;
    println!("zero-based ({}):", triplets.base());
    for (row, col, value) in triplets.iter() {
        println!("  ({row}, {col}) = {value}");
    }
    println!("  row array zero-copy: {}", triplets.rows().is_borrowed());

    #[cfg(feature = "serde")]
    println!("snapshot: {}", triplets.to_buffers().to_json()?);

    Ok(())
}
