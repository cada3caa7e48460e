//! Cache-backed Gaussian sampling strategy.

use std::sync::Arc;

use es_core::ConfigError;

use crate::error::SampleError;
use crate::method::traits::SamplingMethod;
use crate::rng::splitmix64;
use crate::table::NoiseTable;

/// Gaussian sampling over a shared pre-generated [`NoiseTable`].
///
/// A single O(table_size) generation at construction replaces per-call
/// generation for the rest of the run: every `sample` is a window copy out
/// of the table, located by a deterministic hash of the seed.
///
/// # Seed-to-offset mapping
///
/// The logical noise stream of seed `s` is
///
/// ```text
/// stream[i] = table[(base + i) mod table_size],  base = splitmix64(s) mod table_size
/// ```
///
/// `sample(s, dim)` returns `stream[0..dim]` scaled by `std`. The mapping
/// is collision-tolerant: windows of different seeds may overlap, which ES
/// accepts since workers' perturbations only need to be independent
/// samples, not globally disjoint ones. Because `base` does not depend on
/// the requested dimension, `sample_at(s, 0, d)` equals `sample(s, d)`
/// for every `d`, and partitioned windows of one seed concatenate to the
/// full vector.
///
/// The mapping constants ([`splitmix64`]) are part of the cross-worker
/// contract; see [`crate::rng`].
///
/// # Examples
///
/// ```rust
/// use es_sampling::{CachedGaussianSampling, SamplingMethod};
///
/// let sampler = CachedGaussianSampling::new(0.05, 100_000, 7).unwrap();
/// let full = sampler.sample(3, 64).unwrap();
/// let window = sampler.sample_at(3, 16, 16).unwrap();
/// assert_eq!(&full[16..32], window.as_slice());
/// ```
#[derive(Clone, Debug)]
pub struct CachedGaussianSampling {
    /// Noise standard deviation applied to every window copy.
    std: f64,
    /// Shared read-only table of unscaled standard normals.
    table: Arc<NoiseTable>,
}

impl CachedGaussianSampling {
    /// Creates a cached sampler, eagerly generating its noise table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStd`] for a non-positive or
    /// non-finite `std`, or [`ConfigError::InvalidTableSize`] for a zero
    /// `table_size`.
    pub fn new(std: f64, table_size: usize, table_seed: u64) -> Result<Self, ConfigError> {
        let table = Arc::new(NoiseTable::generate(table_size, table_seed)?);
        Self::with_table(std, table)
    }

    /// Creates a cached sampler over an existing shared table.
    ///
    /// The table stores unscaled normals, so several samplers with
    /// different `std` values can share one table within a process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStd`] for a non-positive or
    /// non-finite `std`.
    pub fn with_table(std: f64, table: Arc<NoiseTable>) -> Result<Self, ConfigError> {
        if !std.is_finite() || std <= 0.0 {
            return Err(ConfigError::InvalidStd(std));
        }
        Ok(Self { std, table })
    }

    /// Returns the shared noise table.
    #[inline]
    pub fn table(&self) -> &Arc<NoiseTable> {
        &self.table
    }

    /// Base index of the seed's logical noise stream.
    #[inline]
    fn window_start(&self, seed: u64) -> usize {
        (splitmix64(seed) % self.table.len() as u64) as usize
    }

    /// Copies `length` values starting at `start`, wrapping at the table
    /// end, scaled by `std`.
    fn copy_window(&self, start: usize, length: usize) -> Vec<f64> {
        let values = self.table.values();
        let n = values.len();

        let mut noise = Vec::with_capacity(length);
        for i in 0..length {
            noise.push(values[(start + i) % n] * self.std);
        }
        noise
    }
}

impl SamplingMethod for CachedGaussianSampling {
    #[inline]
    fn std(&self) -> f64 {
        self.std
    }

    fn sample(&self, seed: u64, dim: usize) -> Result<Vec<f64>, SampleError> {
        if dim > self.table.len() {
            return Err(SampleError::DimensionExceedsTable {
                dim,
                table_size: self.table.len(),
            });
        }
        Ok(self.copy_window(self.window_start(seed), dim))
    }

    fn sample_at(
        &self,
        seed: u64,
        offset: usize,
        length: usize,
    ) -> Result<Vec<f64>, SampleError> {
        let table_size = self.table.len();
        match offset.checked_add(length) {
            Some(end) if end <= table_size => {}
            _ => {
                return Err(SampleError::WindowExceedsTable {
                    offset,
                    length,
                    table_size,
                });
            }
        }

        let start = (self.window_start(seed) + offset) % table_size;
        Ok(self.copy_window(start, length))
    }
}
