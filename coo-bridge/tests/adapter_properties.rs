//! Randomized properties of the coordinate adapter
//!
//! Matrices are generated from a fixed seed so failures reproduce.

use coo_bridge::{
    AdapterConfig, CompressedMatrix, CompressedStorage, CooAdapter, IndexBase, Orientation,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ORIENTATIONS: [Orientation; 2] = [Orientation::RowMajor, Orientation::ColumnMajor];

type Entry = (usize, usize, f64);

/// Random entries for an `nrows x ncols` matrix; values are unique ids
fn random_entries(rng: &mut StdRng, nrows: usize, ncols: usize, nnz: usize) -> Vec<Entry> {
    (0..nnz)
        .map(|id| (rng.gen_range(0..nrows), rng.gen_range(0..ncols), id as f64))
        .collect()
}

fn sorted(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| (a.0, a.1, a.2 as i64).cmp(&(b.0, b.1, b.2 as i64)));
    entries
}

/// Shapes covering square, wide, tall and degenerate matrices
fn shapes(rng: &mut StdRng) -> Vec<(usize, usize, usize)> {
    let mut shapes = vec![(1, 1, 1), (5, 5, 0), (1, 9, 6), (9, 1, 6)];
    for _ in 0..20 {
        let nrows = rng.gen_range(1..30);
        let ncols = rng.gen_range(1..30);
        let nnz = rng.gen_range(0..=nrows * ncols);
        shapes.push((nrows, ncols, nnz));
    }
    shapes
}

#[test]
fn test_arrays_have_nnz_length_and_align() {
    let mut rng = StdRng::seed_from_u64(7);
    for (nrows, ncols, nnz) in shapes(&mut rng) {
        let entries = random_entries(&mut rng, nrows, ncols, nnz);
        for orientation in ORIENTATIONS {
            let matrix =
                CompressedMatrix::<i32, f64>::from_triplets(nrows, ncols, orientation, &entries)
                    .unwrap();
            let mut adapter = CooAdapter::with_config(&matrix, AdapterConfig::zero_based());

            assert_eq!(adapter.row_indices().unwrap().len(), nnz);
            assert_eq!(adapter.col_indices().unwrap().len(), nnz);
            assert_eq!(adapter.values().len(), nnz);

            let triplets = adapter.triplets().unwrap();
            for ((row, col, value), (er, ec, ev)) in triplets.iter().zip(matrix.entries()) {
                assert_eq!((row as usize, col as usize, value), (er, ec, ev));
            }
        }
    }
}

#[test]
fn test_round_trip_preserves_triplet_multiset() {
    let mut rng = StdRng::seed_from_u64(11);
    for (nrows, ncols, nnz) in shapes(&mut rng) {
        let entries = random_entries(&mut rng, nrows, ncols, nnz);
        for orientation in ORIENTATIONS {
            let matrix =
                CompressedMatrix::<u32, f64>::from_triplets(nrows, ncols, orientation, &entries)
                    .unwrap();
            let mut adapter = CooAdapter::new(&matrix);
            let buffers = adapter.triplets().unwrap().to_buffers();

            assert_eq!(buffers.base, IndexBase::One);
            assert_eq!(
                sorted(buffers.to_zero_based_entries().unwrap()),
                sorted(entries.clone())
            );
        }
    }
}

#[test]
fn test_rebuilding_from_buffers_reproduces_matrix() {
    let mut rng = StdRng::seed_from_u64(13);
    for (nrows, ncols, nnz) in shapes(&mut rng) {
        let entries = random_entries(&mut rng, nrows, ncols, nnz);
        for orientation in ORIENTATIONS {
            let matrix =
                CompressedMatrix::<i64, f64>::from_triplets(nrows, ncols, orientation, &entries)
                    .unwrap();
            let mut adapter = CooAdapter::new(&matrix);
            let buffers = adapter.triplets().unwrap().to_buffers();

            let rebuilt = CompressedMatrix::<i64, f64>::from_triplets(
                nrows,
                ncols,
                orientation,
                &buffers.to_zero_based_entries().unwrap(),
            )
            .unwrap();
            assert_eq!(rebuilt, matrix);
        }
    }
}

#[test]
fn test_one_based_minus_zero_based_is_one() {
    let mut rng = StdRng::seed_from_u64(17);
    for (nrows, ncols, nnz) in shapes(&mut rng) {
        let entries = random_entries(&mut rng, nrows, ncols, nnz);
        for orientation in ORIENTATIONS {
            let matrix =
                CompressedMatrix::<i32, f64>::from_triplets(nrows, ncols, orientation, &entries)
                    .unwrap();
            let mut adapter = CooAdapter::new(&matrix);

            let rows_one = adapter.row_indices().unwrap().to_vec();
            let cols_one = adapter.col_indices().unwrap().to_vec();
            adapter.set_one_indexed(false);
            let rows_zero = adapter.row_indices().unwrap().to_vec();
            let cols_zero = adapter.col_indices().unwrap().to_vec();

            assert!(rows_one.iter().zip(&rows_zero).all(|(a, b)| a - b == 1));
            assert!(cols_one.iter().zip(&cols_zero).all(|(a, b)| a - b == 1));
        }
    }
}

#[test]
fn test_orientation_symmetry() {
    let mut rng = StdRng::seed_from_u64(19);
    for (nrows, ncols, nnz) in shapes(&mut rng) {
        let entries = random_entries(&mut rng, nrows, ncols, nnz);
        let csr = CompressedMatrix::<usize, f64>::from_triplets(
            nrows,
            ncols,
            Orientation::RowMajor,
            &entries,
        )
        .unwrap();
        let csc = csr.to_orientation(Orientation::ColumnMajor).unwrap();

        let mut from_csr = CooAdapter::new(&csr);
        let mut from_csc = CooAdapter::new(&csc);
        let csr_buffers = from_csr.triplets().unwrap().to_buffers();
        let csc_buffers = from_csc.triplets().unwrap().to_buffers();

        assert_eq!(
            sorted(csr_buffers.to_zero_based_entries().unwrap()),
            sorted(csc_buffers.to_zero_based_entries().unwrap())
        );
    }
}

#[test]
fn test_zero_based_pass_through_is_zero_copy() {
    let mut rng = StdRng::seed_from_u64(23);
    let entries = random_entries(&mut rng, 12, 8, 40);

    let csr = CompressedMatrix::<i32, f64>::from_triplets(12, 8, Orientation::RowMajor, &entries)
        .unwrap();
    let mut adapter = CooAdapter::with_config(&csr, AdapterConfig::zero_based());
    let cols = adapter.col_indices().unwrap();
    assert!(cols.is_borrowed());
    assert_eq!(cols.as_ptr(), csr.trailing_indices().as_ptr());
    assert_eq!(adapter.values().as_ptr(), csr.values().as_ptr());

    let csc = csr.to_orientation(Orientation::ColumnMajor).unwrap();
    let mut adapter = CooAdapter::with_config(&csc, AdapterConfig::zero_based());
    let rows = adapter.row_indices().unwrap();
    assert!(rows.is_borrowed());
    assert_eq!(rows.as_ptr(), csc.trailing_indices().as_ptr());
}

#[test]
fn test_reference_scenarios() {
    let csr = CompressedMatrix::<i32, f64>::new(
        3,
        3,
        Orientation::RowMajor,
        vec![0, 1, 2, 3],
        vec![0, 1, 2],
        vec![5.0, 6.0, 7.0],
    )
    .unwrap();
    let mut adapter = CooAdapter::new(&csr);
    assert_eq!(adapter.row_indices().unwrap().to_vec(), vec![1, 2, 3]);
    assert_eq!(adapter.col_indices().unwrap().to_vec(), vec![1, 2, 3]);
    assert_eq!(adapter.values(), &[5.0, 6.0, 7.0]);

    adapter.set_one_indexed(false);
    assert_eq!(adapter.row_indices().unwrap().to_vec(), vec![0, 1, 2]);
    assert_eq!(adapter.col_indices().unwrap().to_vec(), vec![0, 1, 2]);

    let csc = CompressedMatrix::<i32, f64>::new(
        3,
        3,
        Orientation::ColumnMajor,
        vec![0, 2, 3, 4],
        vec![0, 1, 1, 2],
        vec![1.0, 2.0, 3.0, 4.0],
    )
    .unwrap();
    let mut adapter = CooAdapter::with_config(&csc, AdapterConfig::zero_based());
    assert_eq!(adapter.col_indices().unwrap().to_vec(), vec![0, 0, 1, 2]);
    assert_eq!(adapter.row_indices().unwrap().to_vec(), vec![0, 1, 1, 2]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_expansion_matches_serial() {
    let mut rng = StdRng::seed_from_u64(29);
    let entries = random_entries(&mut rng, 300, 200, 40_000);

    for orientation in ORIENTATIONS {
        let matrix =
            CompressedMatrix::<i32, f64>::from_triplets(300, 200, orientation, &entries).unwrap();

        let serial_config = AdapterConfig::default().with_parallel_threshold(usize::MAX);
        let mut serial = CooAdapter::with_config(&matrix, serial_config);
        let expected = serial.triplets().unwrap().to_buffers();

        let parallel_config = AdapterConfig::default().with_parallel_threshold(1);
        let mut parallel = CooAdapter::with_config(&matrix, parallel_config);
        assert_eq!(parallel.triplets().unwrap().to_buffers(), expected);
    }
}
