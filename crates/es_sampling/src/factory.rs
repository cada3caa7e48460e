//! Sampling method factory.
//!
//! The single construction entry point of the kernel: the training harness
//! calls [`create_sampling_method`] once at setup with its parsed
//! configuration, then only ever talks to the returned sampler. Every
//! configuration failure surfaces here, synchronously — never at the first
//! sampling call deep inside a worker.

use es_core::{ConfigError, SamplingConfig, SamplingKind};

use crate::method::{CachedGaussianSampling, GaussianSampling, NoiseSampler};

/// Constructs the sampling method described by `config`.
///
/// Dispatches on `config.sampling_method()`: `GAUSSIAN` builds a
/// [`GaussianSampling`] from `std`; `CACHED_GAUSSIAN` builds a
/// [`CachedGaussianSampling`] from `std`, `table_size`, and `table_seed`,
/// eagerly generating the shared noise table (the dominant one-time cost).
///
/// The sampler is returned by value and the factory retains no reference;
/// callers that share it across threads wrap it in an `Arc`.
///
/// # Errors
///
/// - [`ConfigError::InvalidStd`] for a non-positive or non-finite `std`
/// - [`ConfigError::MissingTableSize`] /
///   [`ConfigError::InvalidTableSize`] when cached mode lacks a usable
///   table size
///
/// # Examples
///
/// ```rust
/// use es_sampling::{create_sampling_method, SamplingConfig, SamplingKind, SamplingMethod};
///
/// let config = SamplingConfig::builder()
///     .sampling_method(SamplingKind::Gaussian)
///     .std(0.02)
///     .build()
///     .unwrap();
///
/// let sampler = create_sampling_method(&config).unwrap();
/// let noise = sampler.sample(7, 1_000).unwrap();
/// assert_eq!(noise.len(), 1_000);
/// ```
pub fn create_sampling_method(config: &SamplingConfig) -> Result<NoiseSampler, ConfigError> {
    config.validate()?;

    match config.sampling_method() {
        SamplingKind::Gaussian => {
            tracing::debug!(std = config.std(), "constructing direct Gaussian sampler");
            Ok(GaussianSampling::new(config.std())?.into())
        }
        SamplingKind::CachedGaussian => {
            let table_size = config.table_size().ok_or(ConfigError::MissingTableSize)?;
            tracing::debug!(
                std = config.std(),
                table_size,
                table_seed = config.table_seed(),
                "constructing cached Gaussian sampler"
            );
            Ok(CachedGaussianSampling::new(config.std(), table_size, config.table_seed())?.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::SamplingMethod;
    use crate::SampleError;

    fn gaussian_config(std: f64) -> SamplingConfig {
        SamplingConfig::builder()
            .sampling_method(SamplingKind::Gaussian)
            .std(std)
            .build()
            .unwrap()
    }

    fn cached_config(std: f64, table_size: usize) -> SamplingConfig {
        SamplingConfig::builder()
            .sampling_method(SamplingKind::CachedGaussian)
            .std(std)
            .table_size(table_size)
            .build()
            .unwrap()
    }

    #[test]
    fn test_creates_gaussian_sampler() {
        let sampler = create_sampling_method(&gaussian_config(0.05)).unwrap();
        assert_eq!(sampler.kind(), SamplingKind::Gaussian);
        assert_eq!(sampler.std(), 0.05);
    }

    #[test]
    fn test_creates_cached_sampler() {
        let sampler = create_sampling_method(&cached_config(0.05, 10_000)).unwrap();
        assert_eq!(sampler.kind(), SamplingKind::CachedGaussian);
        assert_eq!(sampler.std(), 0.05);
    }

    #[test]
    fn test_identical_configs_yield_identical_samplers() {
        let a = create_sampling_method(&cached_config(1.0, 10_000)).unwrap();
        let b = create_sampling_method(&cached_config(1.0, 10_000)).unwrap();
        assert_eq!(a.sample(42, 500).unwrap(), b.sample(42, 500).unwrap());
    }

    #[test]
    fn test_cached_without_table_size_fails() {
        // Bypass the builder's own validation to prove the factory
        // re-checks the descriptor it is handed.
        let toml_str = r#"
            sampling_method = "CACHED_GAUSSIAN"
            std = 1.0
        "#;
        let config: SamplingConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(
            create_sampling_method(&config).unwrap_err(),
            ConfigError::MissingTableSize
        );
    }

    #[test]
    fn test_invalid_std_fails() {
        let toml_str = r#"
            sampling_method = "GAUSSIAN"
            std = -1.0
        "#;
        let config: SamplingConfig = toml::from_str(toml_str).unwrap();

        assert!(matches!(
            create_sampling_method(&config),
            Err(ConfigError::InvalidStd(_))
        ));
    }

    #[test]
    fn test_small_table_fails_at_first_oversized_call() {
        // Construction succeeds (dim is not known yet); the offending call
        // reports the dimension error.
        let sampler = create_sampling_method(&cached_config(1.0, 10)).unwrap();
        assert_eq!(
            sampler.sample(1, 100).unwrap_err(),
            SampleError::DimensionExceedsTable {
                dim: 100,
                table_size: 10,
            }
        );
    }
}
