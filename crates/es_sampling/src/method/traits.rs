//! Sampling method trait definition.

use crate::error::SampleError;

/// Common capability set of all noise sampling strategies.
///
/// # Contract
///
/// - `sample(seed, dim)` returns the `dim`-length noise vector identified
///   by `seed`, scaled by the configured standard deviation
/// - `sample_at(seed, offset, length)` returns the `[offset, offset +
///   length)` window of the conceptual noise stream identified by `seed`
/// - `resample_inverse(seed, dim)` returns the exact elementwise negation
///   of `sample(seed, dim)`
///
/// # Invariants
///
/// - Determinism: for a fixed configuration, every operation is a pure
///   function of its arguments — bit-identical across calls, instances,
///   processes, and platforms
/// - Windowing: `sample_at(seed, 0, dim)` equals `sample(seed, dim)`, and
///   adjacent windows concatenate to the full vector
/// - Scale: draws under standard deviation `k` equal draws under `1.0`
///   scaled elementwise by `k`
/// - Statistics: draws behave like i.i.d. normals with mean 0 and
///   variance `std²`
///
/// A zero `dim` or `length` yields an empty vector, never an error.
///
/// # Example
///
/// ```
/// use es_sampling::{GaussianSampling, SamplingMethod};
///
/// let sampler = GaussianSampling::new(0.1).unwrap();
///
/// let noise = sampler.sample(7, 64).unwrap();
/// let window = sampler.sample_at(7, 0, 64).unwrap();
/// assert_eq!(noise, window);
///
/// let mirror = sampler.resample_inverse(7, 64).unwrap();
/// assert!(noise.iter().zip(&mirror).all(|(a, b)| *a == -*b));
/// ```
pub trait SamplingMethod {
    /// Returns the configured noise standard deviation.
    fn std(&self) -> f64;

    /// Returns the `dim`-length noise vector identified by `seed`.
    ///
    /// # Errors
    ///
    /// [`SampleError::DimensionExceedsTable`] if a cache-backed strategy
    /// cannot serve `dim` values from its table. The direct strategy never
    /// fails.
    fn sample(&self, seed: u64, dim: usize) -> Result<Vec<f64>, SampleError>;

    /// Returns the `[offset, offset + length)` window of the noise stream
    /// identified by `seed`.
    ///
    /// Lets workers holding a partition of the parameter vector fetch just
    /// their share of one logical perturbation without materialising the
    /// full `dim`-length vector anywhere.
    ///
    /// # Errors
    ///
    /// [`SampleError::WindowExceedsTable`] if a cache-backed strategy
    /// cannot serve the window from its table.
    fn sample_at(&self, seed: u64, offset: usize, length: usize)
        -> Result<Vec<f64>, SampleError>;

    /// Returns the exact elementwise negation of `sample(seed, dim)`.
    ///
    /// The default implementation negates the deterministic `sample`
    /// result, which is exact for every strategy: an antithetic pair sums
    /// to precisely zero, element by element.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`SamplingMethod::sample`].
    fn resample_inverse(&self, seed: u64, dim: usize) -> Result<Vec<f64>, SampleError> {
        let mut noise = self.sample(seed, dim)?;
        for value in noise.iter_mut() {
            *value = -*value;
        }
        Ok(noise)
    }
}
