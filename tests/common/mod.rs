//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic random samples of any type `rand` can generate uniformly
pub fn random_image<T>(rows: usize, cols: usize, seed: u64) -> Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows * cols).map(|_| rng.gen()).collect()
}

/// Copy a strided view into a contiguous row-major vector
pub fn contiguous_copy<T: Copy>(image: &ndimage_stats::ndimage_core::StridedImage<'_, T>) -> Vec<T> {
    let mut out = Vec::with_capacity(image.len());
    for r in 0..image.rows() {
        out.extend(image.row_span(r, 0..image.cols()));
    }
    out
}

/// Store `values` (row-major `rows x cols`) column-major with padding, and
/// return the buffer along with byte offset and byte strides describing the
/// same logical image
pub fn column_major_padded<T: Copy + Default>(
    values: &[T],
    rows: usize,
    cols: usize,
    pad: usize,
) -> (Vec<T>, usize, [isize; 2]) {
    let size = std::mem::size_of::<T>() as isize;
    let pitch = rows + pad;
    let mut buffer = vec![T::default(); pad + cols * pitch];
    for r in 0..rows {
        for c in 0..cols {
            buffer[pad + c * pitch + r] = values[r * cols + c];
        }
    }
    (buffer, pad * size as usize, [size, pitch as isize * size])
}
