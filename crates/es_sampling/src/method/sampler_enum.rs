//! Static dispatch enum over the sampling strategies.

use es_core::SamplingKind;

use crate::error::SampleError;
use crate::method::cached::CachedGaussianSampling;
use crate::method::gaussian::GaussianSampling;
use crate::method::traits::SamplingMethod;

/// Static dispatch enum wrapping the concrete sampling strategies.
///
/// A flat two-variant sum type keeps the factory's dispatch a single
/// one-level match and keeps sampling calls free of vtable indirection.
/// The sampler is immutable after construction and `Send + Sync`; wrap it
/// in an `Arc` to share one handle across worker threads.
///
/// # Example
///
/// ```
/// use es_sampling::{GaussianSampling, NoiseSampler, SamplingMethod};
/// use es_core::SamplingKind;
///
/// let sampler = NoiseSampler::from(GaussianSampling::new(0.1).unwrap());
/// assert_eq!(sampler.kind(), SamplingKind::Gaussian);
/// assert_eq!(sampler.sample(1, 8).unwrap().len(), 8);
/// ```
#[derive(Clone, Debug)]
pub enum NoiseSampler {
    /// Direct Gaussian sampling (fresh draws per call).
    Gaussian(GaussianSampling),
    /// Cache-backed Gaussian sampling over a shared table.
    Cached(CachedGaussianSampling),
}

impl NoiseSampler {
    /// Returns the configuration kind this sampler was built from.
    #[inline]
    pub fn kind(&self) -> SamplingKind {
        match self {
            NoiseSampler::Gaussian(_) => SamplingKind::Gaussian,
            NoiseSampler::Cached(_) => SamplingKind::CachedGaussian,
        }
    }
}

impl SamplingMethod for NoiseSampler {
    /// Delegates to the underlying strategy.
    fn std(&self) -> f64 {
        match self {
            NoiseSampler::Gaussian(sampler) => sampler.std(),
            NoiseSampler::Cached(sampler) => sampler.std(),
        }
    }

    /// Delegates to the underlying strategy.
    fn sample(&self, seed: u64, dim: usize) -> Result<Vec<f64>, SampleError> {
        match self {
            NoiseSampler::Gaussian(sampler) => sampler.sample(seed, dim),
            NoiseSampler::Cached(sampler) => sampler.sample(seed, dim),
        }
    }

    /// Delegates to the underlying strategy.
    fn sample_at(
        &self,
        seed: u64,
        offset: usize,
        length: usize,
    ) -> Result<Vec<f64>, SampleError> {
        match self {
            NoiseSampler::Gaussian(sampler) => sampler.sample_at(seed, offset, length),
            NoiseSampler::Cached(sampler) => sampler.sample_at(seed, offset, length),
        }
    }

    /// Delegates to the underlying strategy.
    fn resample_inverse(&self, seed: u64, dim: usize) -> Result<Vec<f64>, SampleError> {
        match self {
            NoiseSampler::Gaussian(sampler) => sampler.resample_inverse(seed, dim),
            NoiseSampler::Cached(sampler) => sampler.resample_inverse(seed, dim),
        }
    }
}

impl From<GaussianSampling> for NoiseSampler {
    fn from(sampler: GaussianSampling) -> Self {
        NoiseSampler::Gaussian(sampler)
    }
}

impl From<CachedGaussianSampling> for NoiseSampler {
    fn from(sampler: CachedGaussianSampling) -> Self {
        NoiseSampler::Cached(sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_reports_variant() {
        let gaussian = NoiseSampler::from(GaussianSampling::new(1.0).unwrap());
        assert_eq!(gaussian.kind(), SamplingKind::Gaussian);

        let cached = NoiseSampler::from(CachedGaussianSampling::new(1.0, 100, 7).unwrap());
        assert_eq!(cached.kind(), SamplingKind::CachedGaussian);
    }

    #[test]
    fn test_delegation_matches_inner_sampler() {
        let inner = GaussianSampling::new(0.5).unwrap();
        let wrapped = NoiseSampler::from(inner);

        assert_eq!(wrapped.std(), 0.5);
        assert_eq!(wrapped.sample(3, 16).unwrap(), inner.sample(3, 16).unwrap());
        assert_eq!(
            wrapped.sample_at(3, 4, 8).unwrap(),
            inner.sample_at(3, 4, 8).unwrap()
        );
        assert_eq!(
            wrapped.resample_inverse(3, 16).unwrap(),
            inner.resample_inverse(3, 16).unwrap()
        );
    }

    #[test]
    fn test_cached_errors_pass_through() {
        let sampler = NoiseSampler::from(CachedGaussianSampling::new(1.0, 10, 7).unwrap());
        assert!(matches!(
            sampler.sample(1, 100),
            Err(SampleError::DimensionExceedsTable { .. })
        ));
    }

    #[test]
    fn test_sampler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoiseSampler>();
    }
}
