//! Configuration error types.
//!
//! All variants are deterministic, configuration-derived failures. They
//! surface at construction time and are fatal to startup; nothing here is
//! transient or retryable, and nothing is ever silently defaulted.

use thiserror::Error;

/// Errors raised while building or loading a sampling configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Sampling method string did not match any known kind.
    #[error("Unknown sampling method '{0}': must be one of: GAUSSIAN, CACHED_GAUSSIAN")]
    UnknownSamplingMethod(String),

    /// Noise standard deviation was zero, negative, or non-finite.
    #[error("Invalid noise std {0}: must be positive and finite")]
    InvalidStd(f64),

    /// Cached mode was selected without a table size.
    #[error("Cached Gaussian sampling requires table_size to be set")]
    MissingTableSize,

    /// Table size outside the valid range.
    #[error("Invalid table size {0}: must be positive")]
    InvalidTableSize(usize),

    /// Invalid or missing parameter with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable missing or unparseable.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}
