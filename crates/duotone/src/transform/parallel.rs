//! Row dispatch with an optional rayon fast path.
//!
//! Rows have no data dependency on each other, so large buffers are split
//! by row across the rayon pool. Small buffers stay on the calling thread
//! where the pool overhead would dominate.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum pixel count before rows are processed in parallel.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Apply `f(src_row, dst_row)` to every row pair.
///
/// `row_len` is the row stride in bytes; both slices must be a whole
/// number of rows of the same length.
pub(crate) fn for_each_row<F>(src: &[u8], dst: &mut [u8], row_len: usize, f: F)
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    debug_assert_eq!(src.len(), dst.len());
    dispatch(src, dst, row_len, f);
}

#[cfg(feature = "parallel")]
fn dispatch<F>(src: &[u8], dst: &mut [u8], row_len: usize, f: F)
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    let pixels = src.len() / crate::buffer::CHANNELS;
    if pixels >= PARALLEL_THRESHOLD {
        dst.par_chunks_exact_mut(row_len)
            .zip(src.par_chunks_exact(row_len))
            .for_each(|(dst_row, src_row)| f(src_row, dst_row));
    } else {
        sequential(src, dst, row_len, f);
    }
}

#[cfg(not(feature = "parallel"))]
fn dispatch<F>(src: &[u8], dst: &mut [u8], row_len: usize, f: F)
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    sequential(src, dst, row_len, f);
}

pub(crate) fn sequential<F>(src: &[u8], dst: &mut [u8], row_len: usize, f: F)
where
    F: Fn(&[u8], &mut [u8]),
{
    for (dst_row, src_row) in dst.chunks_exact_mut(row_len).zip(src.chunks_exact(row_len)) {
        f(src_row, dst_row);
    }
}
