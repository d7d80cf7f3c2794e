//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic random u16 data with at most `bits` significant bits
pub fn random_u16(len: usize, bits: u32, seed: u64) -> Vec<u16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mask = if bits >= 16 { u16::MAX } else { (1u16 << bits) - 1 };
    (0..len).map(|_| rng.gen::<u16>() & mask).collect()
}

/// Deterministic random f64 data in `[lo, hi)`
pub fn random_f64(len: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Reference direct histogram computed from a contiguous copy
pub fn reference_direct(values: &[u16], shift: u32, n_bins: usize) -> Vec<u32> {
    let mut counts = vec![0u32; n_bins];
    for &v in values {
        counts[((v >> shift) as usize).min(n_bins - 1)] += 1;
    }
    counts
}
