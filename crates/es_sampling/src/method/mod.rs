//! Sampling strategies behind a common interface.
//!
//! The [`SamplingMethod`] trait defines the capability set every strategy
//! exposes; [`GaussianSampling`] and [`CachedGaussianSampling`] are the
//! two implementations, and [`NoiseSampler`] wraps them in a flat
//! static-dispatch enum so the hot path never goes through a vtable.
//!
//! # Architecture
//!
//! ```text
//! NoiseSampler (enum)
//! ├── GaussianSampling        fresh seeded draws, O(dim) per call
//! └── CachedGaussianSampling  window into a shared NoiseTable, O(1) lookup
//! ```

mod cached;
mod gaussian;
mod sampler_enum;
mod traits;

// Public re-exports
pub use cached::CachedGaussianSampling;
pub use gaussian::GaussianSampling;
pub use sampler_enum::NoiseSampler;
pub use traits::SamplingMethod;
