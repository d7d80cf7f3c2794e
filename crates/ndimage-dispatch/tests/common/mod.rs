//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness; `RUST_LOG` selects levels
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The 8-bit 2x3 test image
pub const PIXELS_U8: [u8; 6] = [10, 250, 10, 0, 10, 255];

/// Sentinel the outputs start from, so untouched outputs are detectable
pub const UNTOUCHED: u32 = 0xdead_beef;

/// Deterministic random samples of any type `rand` can generate uniformly
pub fn random_values<T>(len: usize, seed: u64) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

/// Storage, byte offset and byte strides describing a logical image
pub type Layout<T> = (Vec<T>, usize, [isize; 2]);

/// `values` (row-major `rows x cols`) stored column-major with `pad` unused
/// elements before the data and after every column
pub fn column_major_padded<T: Copy + Default>(
    values: &[T],
    rows: usize,
    cols: usize,
    pad: usize,
) -> Layout<T> {
    let size = std::mem::size_of::<T>();
    let pitch = rows + pad;
    let mut storage = vec![T::default(); pad + cols * pitch];
    for r in 0..rows {
        for c in 0..cols {
            storage[pad + c * pitch + r] = values[r * cols + c];
        }
    }
    (storage, pad * size, [size as isize, (pitch * size) as isize])
}

/// `values` stored bottom row first, addressed with a negative row stride
pub fn flipped_rows<T: Copy>(values: &[T], rows: usize, cols: usize) -> Layout<T> {
    let size = std::mem::size_of::<T>();
    let storage: Vec<T> = values.chunks(cols).rev().flatten().copied().collect();
    let offset = rows.saturating_sub(1) * cols * size;
    (storage, offset, [-((cols * size) as isize), size as isize])
}
