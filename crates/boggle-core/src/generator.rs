//! Random letter boards.

use crate::Grid;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Random board generator.
///
/// Every cell is drawn independently and uniformly from `A..=Z`. The entropy
/// source is pluggable through [`Generator::with_rng`]; by default a
/// [`StdRng`] seeded from the OS is used.
pub struct Generator<R: RngCore = StdRng> {
    rng: R,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> Generator<R> {
    /// Create a generator drawing from any `rand` source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `size` x `size` board, or `None` when `size` is zero.
    pub fn generate(&mut self, size: usize) -> Option<Grid> {
        if size == 0 {
            return None;
        }
        let cells = size.checked_mul(size)?;

        let letters: Vec<u8> = (0..cells).map(|_| self.rng.gen_range(b'A'..=b'Z')).collect();
        debug!("generated {size}x{size} board");
        Grid::from_cells(size, size, letters)
    }
}
