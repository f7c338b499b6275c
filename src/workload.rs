//! Synthetic batches for benchmarks and scale tests

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seed used by [`make_workload`]
pub const DEFAULT_SEED: u64 = 12345;

// printable ASCII from ' ' up to and including '}'
const RUNES: core::ops::Range<u8> = 32..126;

/// Build `count` strings of `size` printable ASCII characters.
///
/// The same arguments always produce the same batch.
pub fn make_workload(count: usize, size: usize) -> Vec<String> {
    Workload::new(DEFAULT_SEED).batch(count, size)
}

/// Seeded text generator
#[derive(Debug, Clone)]
pub struct Workload {
    rng: StdRng,
}

impl Workload {
    /// Create a generator, equal seeds produce equal texts
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One string of `size` characters
    pub fn text(&mut self, size: usize) -> String {
        (0..size)
            .map(|_| char::from(self.rng.gen_range(RUNES)))
            .collect()
    }

    /// `count` strings of `size` characters each
    pub fn batch(&mut self, count: usize, size: usize) -> Vec<String> {
        (0..count).map(|_| self.text(size)).collect()
    }
}
