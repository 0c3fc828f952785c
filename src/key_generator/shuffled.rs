use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over a random permutation of `0..num`, fully determined by the
/// seed. The permutation is drawn lazily, one swap per returned value
pub struct ShuffledGenerator {
    pool: Vec<usize>,
    position: usize,
    rng: Pcg64,
}

impl ShuffledGenerator {
    pub fn new(num: usize, seed: u64) -> ShuffledGenerator {
        ShuffledGenerator {
            pool: (0..num).collect(),
            position: 0,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for ShuffledGenerator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.pool.len() {
            return None;
        }

        // Fisher-Yates: pick among the values not returned yet
        let chosen = self.rng.gen_range(self.position, self.pool.len());
        self.pool.swap(self.position, chosen);
        self.position += 1;
        Some(self.pool[self.position - 1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.pool.len() - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for ShuffledGenerator {}

impl ExactSizeIterator for ShuffledGenerator {}
