//! Error types for sampling operations.
//!
//! These cover the single runtime failure mode of the kernel: a cached
//! sampler asked for more values than its table can serve. They are
//! programming/configuration errors — deterministic, never transient, and
//! never retried. Construction-time failures live in
//! [`es_core::ConfigError`].

use thiserror::Error;

/// Errors raised by [`SamplingMethod`](crate::SamplingMethod) calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Requested dimension exceeds the noise table size.
    ///
    /// A window longer than the table would have to repeat values within
    /// a single vector, which breaks the i.i.d. assumption.
    #[error("Requested dimension {dim} exceeds noise table size {table_size}")]
    DimensionExceedsTable {
        /// The requested noise vector dimension.
        dim: usize,
        /// Size of the table the sampler holds.
        table_size: usize,
    },

    /// Requested sub-window extends past the noise table size.
    #[error("Window [{offset}, {offset} + {length}) exceeds noise table size {table_size}")]
    WindowExceedsTable {
        /// Window start within the logical noise vector.
        offset: usize,
        /// Window length.
        length: usize,
        /// Size of the table the sampler holds.
        table_size: usize,
    },
}
