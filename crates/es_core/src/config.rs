//! Sampling configuration descriptor.
//!
//! Handles construction (builder), validation, and loading from TOML files
//! and environment variables. The descriptor is immutable once built; the
//! sampling kernel reads it exactly once, at factory time.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default seed for the shared noise table.
///
/// Arbitrary but fixed: every worker that derives its table from the same
/// `(table_size, table_seed)` pair regenerates an identical table, so this
/// value must only change together with a coordinated redeployment.
pub const DEFAULT_TABLE_SEED: u64 = 271_828_182_845;

/// Sampling strategy kinds understood by the factory.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
/// use es_core::SamplingKind;
///
/// assert_eq!(SamplingKind::from_str("GAUSSIAN").unwrap(), SamplingKind::Gaussian);
/// assert_eq!(SamplingKind::CachedGaussian.as_str(), "CACHED_GAUSSIAN");
/// assert!(SamplingKind::from_str("UNKNOWN").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SamplingKind {
    /// Direct Gaussian sampling: fresh draws on every call.
    Gaussian,
    /// Cache-backed Gaussian sampling over a shared pre-generated table.
    CachedGaussian,
}

impl SamplingKind {
    /// Return the canonical string representation of the kind.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingKind::Gaussian => "GAUSSIAN",
            SamplingKind::CachedGaussian => "CACHED_GAUSSIAN",
        }
    }
}

impl FromStr for SamplingKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GAUSSIAN" => Ok(SamplingKind::Gaussian),
            "CACHED_GAUSSIAN" => Ok(SamplingKind::CachedGaussian),
            _ => Err(ConfigError::UnknownSamplingMethod(s.to_string())),
        }
    }
}

impl fmt::Display for SamplingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_table_seed() -> u64 {
    DEFAULT_TABLE_SEED
}

/// Immutable sampling configuration.
///
/// Describes which strategy the factory should construct and with which
/// parameters. Use [`SamplingConfig::builder`] for programmatic
/// construction, or [`SamplingConfig::from_file`] /
/// [`SamplingConfig::from_env`] at the process boundary.
///
/// # Examples
///
/// ```rust
/// use es_core::{SamplingConfig, SamplingKind};
///
/// let config = SamplingConfig::builder()
///     .sampling_method(SamplingKind::Gaussian)
///     .std(0.02)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.std(), 0.02);
/// assert_eq!(config.table_size(), None);
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct SamplingConfig {
    /// Which sampling strategy to construct.
    sampling_method: SamplingKind,
    /// Noise standard deviation applied to every draw.
    std: f64,
    /// Noise table size; required iff `sampling_method` is cached.
    #[serde(default)]
    table_size: Option<usize>,
    /// Seed the shared noise table is generated from.
    #[serde(default = "default_table_seed")]
    table_seed: u64,
    /// Root seed for deriving per-worker sampling seeds.
    #[serde(default)]
    base_seed: u64,
}

impl SamplingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// Returns the configured sampling strategy kind.
    #[inline]
    pub fn sampling_method(&self) -> SamplingKind {
        self.sampling_method
    }

    /// Returns the noise standard deviation.
    #[inline]
    pub fn std(&self) -> f64 {
        self.std
    }

    /// Returns the noise table size, if set.
    #[inline]
    pub fn table_size(&self) -> Option<usize> {
        self.table_size
    }

    /// Returns the seed the shared noise table is generated from.
    #[inline]
    pub fn table_seed(&self) -> u64 {
        self.table_seed
    }

    /// Returns the root seed for worker seed derivation.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidStd`] if `std` is zero, negative, or
    ///   non-finite
    /// - [`ConfigError::MissingTableSize`] if cached mode is selected
    ///   without a table size
    /// - [`ConfigError::InvalidTableSize`] if a table size of zero is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.std.is_finite() || self.std <= 0.0 {
            return Err(ConfigError::InvalidStd(self.std));
        }
        if self.sampling_method == SamplingKind::CachedGaussian {
            match self.table_size {
                None => return Err(ConfigError::MissingTableSize),
                Some(0) => return Err(ConfigError::InvalidTableSize(0)),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileError`] if the file cannot be read or
    /// parsed, or a validation error if the parsed descriptor is invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: SamplingConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from environment variables.
    ///
    /// Recognised variables:
    ///
    /// | Variable             | Field             | Required |
    /// |----------------------|-------------------|----------|
    /// | `ES_SAMPLING_METHOD` | `sampling_method` | yes      |
    /// | `ES_NOISE_STD`       | `std`             | yes      |
    /// | `ES_TABLE_SIZE`      | `table_size`      | cached   |
    /// | `ES_TABLE_SEED`      | `table_seed`      | no       |
    /// | `ES_BASE_SEED`       | `base_seed`       | no       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let method = std::env::var("ES_SAMPLING_METHOD")
            .map_err(|_| ConfigError::EnvError("ES_SAMPLING_METHOD is not set".to_string()))?;
        let sampling_method = SamplingKind::from_str(&method)?;

        let std = std::env::var("ES_NOISE_STD")
            .map_err(|_| ConfigError::EnvError("ES_NOISE_STD is not set".to_string()))?
            .parse::<f64>()
            .map_err(|e| ConfigError::EnvError(format!("ES_NOISE_STD: {}", e)))?;

        let mut builder = SamplingConfig::builder()
            .sampling_method(sampling_method)
            .std(std);

        if let Ok(size) = std::env::var("ES_TABLE_SIZE") {
            let size = size
                .parse::<usize>()
                .map_err(|e| ConfigError::EnvError(format!("ES_TABLE_SIZE: {}", e)))?;
            builder = builder.table_size(size);
        }
        if let Ok(seed) = std::env::var("ES_TABLE_SEED") {
            let seed = seed
                .parse::<u64>()
                .map_err(|e| ConfigError::EnvError(format!("ES_TABLE_SEED: {}", e)))?;
            builder = builder.table_seed(seed);
        }
        if let Ok(seed) = std::env::var("ES_BASE_SEED") {
            let seed = seed
                .parse::<u64>()
                .map_err(|e| ConfigError::EnvError(format!("ES_BASE_SEED: {}", e)))?;
            builder = builder.base_seed(seed);
        }

        builder.build()
    }
}

/// Builder for [`SamplingConfig`].
///
/// Validation happens once, at [`SamplingConfigBuilder::build`] time, so
/// an invalid descriptor never escapes this module.
///
/// # Examples
///
/// ```rust
/// use es_core::{SamplingConfig, SamplingKind};
///
/// let config = SamplingConfig::builder()
///     .sampling_method(SamplingKind::CachedGaussian)
///     .std(0.05)
///     .table_size(250_000)
///     .table_seed(7)
///     .base_seed(42)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SamplingConfigBuilder {
    sampling_method: Option<SamplingKind>,
    std: Option<f64>,
    table_size: Option<usize>,
    table_seed: Option<u64>,
    base_seed: u64,
}

impl SamplingConfigBuilder {
    /// Sets the sampling strategy kind.
    #[inline]
    pub fn sampling_method(mut self, kind: SamplingKind) -> Self {
        self.sampling_method = Some(kind);
        self
    }

    /// Sets the noise standard deviation.
    #[inline]
    pub fn std(mut self, std: f64) -> Self {
        self.std = Some(std);
        self
    }

    /// Sets the noise table size (cached mode only).
    #[inline]
    pub fn table_size(mut self, table_size: usize) -> Self {
        self.table_size = Some(table_size);
        self
    }

    /// Sets the noise table seed.
    #[inline]
    pub fn table_seed(mut self, table_seed: u64) -> Self {
        self.table_seed = Some(table_seed);
        self
    }

    /// Sets the root seed for worker seed derivation.
    #[inline]
    pub fn base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `sampling_method` or
    /// `std` is unset, plus any error from [`SamplingConfig::validate`].
    pub fn build(self) -> Result<SamplingConfig, ConfigError> {
        let sampling_method = self.sampling_method.ok_or(ConfigError::InvalidParameter {
            name: "sampling_method",
            value: "must be specified".to_string(),
        })?;

        let std = self.std.ok_or(ConfigError::InvalidParameter {
            name: "std",
            value: "must be specified".to_string(),
        })?;

        let config = SamplingConfig {
            sampling_method,
            std,
            table_size: self.table_size,
            table_seed: self.table_seed.unwrap_or(DEFAULT_TABLE_SEED),
            base_seed: self.base_seed,
        };

        config.validate()?;
        Ok(config)
    }
}
