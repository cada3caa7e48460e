//! Shared noise table for cache-backed sampling.

use std::fmt;
use std::time::Instant;

use es_core::ConfigError;

use crate::rng::NoiseRng;

/// Pre-generated buffer of standard-normal scalars.
///
/// Generated exactly once from `(table_size, table_seed)` and never
/// mutated afterwards. Workers with the same configuration regenerate an
/// identical table independently at startup, so nothing is transmitted or
/// synchronised; within a process the table is shared behind an `Arc` and
/// read without locking.
///
/// The table stores *unscaled* standard normals. Scaling by the noise
/// standard deviation happens in the sampling strategy, so one table can
/// back samplers with different `std` values.
///
/// # Examples
///
/// ```rust
/// use es_sampling::NoiseTable;
///
/// let a = NoiseTable::generate(10_000, 7).unwrap();
/// let b = NoiseTable::generate(10_000, 7).unwrap();
/// assert_eq!(a.values(), b.values());
/// ```
pub struct NoiseTable {
    values: Vec<f64>,
    table_seed: u64,
}

impl NoiseTable {
    /// Generates a table of `table_size` standard-normal scalars from
    /// `table_seed`.
    ///
    /// This is the dominant one-time cost of cache-backed sampling,
    /// O(table_size); it runs eagerly so that configuration failures and
    /// the generation cost both land at startup, before the table is
    /// shared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableSize`] if `table_size` is zero.
    pub fn generate(table_size: usize, table_seed: u64) -> Result<Self, ConfigError> {
        if table_size == 0 {
            return Err(ConfigError::InvalidTableSize(0));
        }

        let started = Instant::now();
        let mut values = vec![0.0; table_size];
        let mut rng = NoiseRng::from_seed(table_seed);
        rng.fill_normal(&mut values);

        tracing::debug!(
            table_size,
            table_seed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated shared noise table"
        );

        Ok(Self { values, table_seed })
    }

    /// Returns the number of scalars in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the table holds no values.
    ///
    /// Always `false` for a constructed table; generation rejects size
    /// zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the seed the table was generated from.
    #[inline]
    pub fn table_seed(&self) -> u64 {
        self.table_seed
    }

    /// Returns the table contents as an immutable slice.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

// Hand-written so a debug-printed sampler does not dump millions of
// scalars.
impl fmt::Debug for NoiseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseTable")
            .field("len", &self.values.len())
            .field("table_seed", &self.table_seed)
            .finish()
    }
}
