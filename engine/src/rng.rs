//! Bit-stream randomness: a 32-bit Mersenne Twister read one bit at a
//! time, plus the per-epoch seed ledger consulted by the driver.

use rand::RngCore;
use rand_mt::Mt;

/// Number of per-epoch seeds drawn up front.
pub const LEDGER_LEN: usize = 256;

/// Fair ±1 generator backed by mt19937 words.
///
/// A fresh 32-bit word is drawn only when the previous one is spent, and
/// bits are consumed from bit 0 upward; which bit lands on which lattice
/// site is part of the seeded-run contract.
#[derive(Debug, Clone)]
pub struct BitSource {
    gen: Mt,
    word: u32,
    offset: u32,
}

impl BitSource {
    /// Start a source from a raw generator seed, with the reservoir spent.
    pub fn new(seed: u32) -> Self {
        Self { gen: Mt::new(seed), word: 0, offset: 32 }
    }

    /// Replace the generator state and discard any buffered bits.
    ///
    /// Bits buffered before a reseed belong to the previous epoch's stream
    /// and must not leak across the boundary; the driver's replay guarantee
    /// depends on the next request drawing a fresh word.
    pub fn reseed(&mut self, seed: i32) {
        self.gen = Mt::new(seed as u32);
        self.offset = 32;
    }

    /// Draw a fair ±1.
    pub fn next_pm1(&mut self) -> i32 {
        if self.offset == 32 {
            self.word = self.gen.next_u32();
            self.offset = 0;
        }
        let bit = (self.word >> self.offset) & 1;
        self.offset += 1;
        if bit == 1 {
            1
        } else {
            -1
        }
    }
}

/// Per-epoch seed table, filled once per sampling run.
///
/// Epoch `k` of the look-back schedule is always replayed with seed `k`,
/// no matter how often the outer window doubles.
#[derive(Debug, Clone)]
pub struct SeedLedger {
    seeds: [i32; LEDGER_LEN],
}

impl SeedLedger {
    /// Fill the table from a bootstrap generator seeded with `seed`.
    pub fn generate(seed: i32) -> Self {
        let mut boot = Mt::new(seed as u32);
        let mut seeds = [0i32; LEDGER_LEN];
        for entry in seeds.iter_mut() {
            *entry = boot.next_u32() as i32;
        }
        Self { seeds }
    }

    /// Seed assigned to look-back epoch `epoch`.
    pub fn get(&self, epoch: usize) -> i32 {
        self.seeds[epoch]
    }
}

/// Draw a generator seed from system entropy, for non-reproducible runs.
pub fn entropy_seed() -> i32 {
    rand::random()
}
