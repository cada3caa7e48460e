//! Deterministic seed derivation.
//!
//! The coordinator hands each worker nothing but integers: a base seed and
//! a worker id, or a stream of per-iteration seeds. The helpers here turn
//! those integers into well-distributed 64-bit seeds, and double as the
//! seed-to-table-offset map of the cached sampling strategy.
//!
//! The constants are the SplitMix64 reference parameters and are part of
//! the wire contract: any independent implementation must use the same
//! values to reconstruct the same noise from a seed.

/// Golden-ratio increment from the SplitMix64 reference.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// SplitMix64 hash of a single seed.
///
/// Equivalent to the first output of the reference SplitMix64 generator
/// started at `seed`. Used both to spread raw seeds (which are often small
/// consecutive integers) over the full 64-bit range and as the
/// seed-to-offset map of the cached sampler.
///
/// # Examples
///
/// ```rust
/// use es_sampling::rng::splitmix64;
///
/// // Reference test vector for the generator started at 0.
/// assert_eq!(splitmix64(0), 0xE220_A839_7B1D_CDAF);
/// // Pure function of the input.
/// assert_eq!(splitmix64(7), splitmix64(7));
/// ```
#[inline]
pub fn splitmix64(seed: u64) -> u64 {
    mix(seed.wrapping_add(GOLDEN_GAMMA))
}

/// Derives the sampling seed for one worker from the configured base seed.
///
/// Mixes the worker id into the base seed with a golden-ratio multiply so
/// that consecutive worker ids land far apart in seed space.
#[inline]
pub fn worker_seed(base_seed: u64, worker_id: u64) -> u64 {
    splitmix64(base_seed.wrapping_add(worker_id.wrapping_mul(GOLDEN_GAMMA)))
}

/// Deterministic stream of sub-seeds expanded from a root seed.
///
/// Matches the reference SplitMix64 sequence: `SeedSequence::new(s)`
/// produces `splitmix64(s)`, then the generator's subsequent outputs.
#[derive(Clone, Debug)]
pub struct SeedSequence {
    state: u64,
}

impl SeedSequence {
    /// Creates a sequence rooted at `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next sub-seed.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix(self.state)
    }

    /// Returns `n` sub-seeds.
    pub fn split_n(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.next_seed()).collect()
    }
}
