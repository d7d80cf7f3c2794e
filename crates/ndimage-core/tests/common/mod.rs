//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shapes that hit the interesting scan edges
pub fn edge_case_shapes() -> Vec<(usize, usize)> {
    vec![
        (0, 0), // Empty
        (0, 7), // No rows
        (5, 0), // No columns
        (1, 1), // Single element
        (1, 17),
        (17, 1),
        (3, 5),
        (16, 16),
        (31, 7),
    ]
}

/// Deterministic random u16 data
pub fn random_u16(len: usize, seed: u64) -> Vec<u16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

/// Deterministic random f32 data in `[-scale, scale)`
pub fn random_f32(len: usize, scale: f32, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-scale..scale)).collect()
}

/// Embed a `rows x cols` image in a larger buffer with a padded row pitch
/// and a column step of `col_step`. Returns the buffer, origin and strides.
pub fn padded_layout<T: Copy + Default>(
    values: &[T],
    rows: usize,
    cols: usize,
    col_step: usize,
    pad: usize,
) -> (Vec<T>, usize, (isize, isize)) {
    let pitch = cols * col_step + pad;
    let origin = pad;
    let mut buffer = vec![T::default(); origin + rows * pitch + pad];
    for r in 0..rows {
        for c in 0..cols {
            buffer[origin + r * pitch + c * col_step] = values[r * cols + c];
        }
    }
    (buffer, origin, (pitch as isize, col_step as isize))
}
