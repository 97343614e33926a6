//! Parallel expansion of leading arrays on the rayon pool

use coo_bridge_core::{IndexBase, SparseIndex};
use rayon::prelude::*;

/// Parallel counterpart of [`coo_bridge_core::expand_leading`]
///
/// The output is split into chunks of `chunk_len` nonzeros. Each chunk
/// finds the line owning its first position with a binary search on the
/// leading array and then walks forward, so no two tasks touch the same
/// output range.
pub fn expand_leading_par<I: SparseIndex>(
    leading: &[I],
    base: IndexBase,
    chunk_len: usize,
    out: &mut Vec<I>,
) {
    let nnz = leading.last().map_or(0, |last| last.to_usize());
    out.resize(nnz, I::zeroed());
    if nnz == 0 {
        return;
    }

    let offset = base.offset();
    let chunk_len = chunk_len.max(1);

    out.par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let start = chunk_index * chunk_len;
            // leading[0] == 0 <= start, so the partition point is at least 1
            let mut line = leading.partition_point(|bound| bound.to_usize() <= start) - 1;

            for (step, slot) in chunk.iter_mut().enumerate() {
                let position = start + step;
                while leading[line + 1].to_usize() <= position {
                    line += 1;
                }
                *slot = I::from_usize(line + offset);
            }
        });
}
