//! # Evostrat Sampling Kernel
//!
//! Perturbation-noise generation for distributed evolution strategies.
//! Each worker perturbs a D-dimensional parameter vector with Gaussian
//! noise; only integer seeds cross process boundaries, and any worker can
//! reconstruct the exact noise vector for a seed without receiving data.
//!
//! The kernel offers two strategies behind one interface:
//!
//! - [`GaussianSampling`]: a fresh seeded draw on every call — O(dim) time
//!   and memory per sample, no persistent state.
//! - [`CachedGaussianSampling`]: one large standard-normal [`NoiseTable`]
//!   generated once; each sample is a window into the table located by a
//!   deterministic hash of the seed, amortising generation cost across
//!   millions of requests.
//!
//! [`create_sampling_method`] dispatches on a validated
//! [`SamplingConfig`] descriptor and returns a [`NoiseSampler`], a flat
//! static-dispatch enum over the two strategies (no `Box<dyn Trait>` in
//! hot paths).
//!
//! ## Determinism contract
//!
//! For a fixed configuration, `sample(seed, dim)` is a pure function:
//! bit-identical across calls, instances, processes, and platforms. The
//! underlying engine is pinned ([`NoiseRng`] over ChaCha8) and the
//! seed-to-table-offset mapping is fixed ([`rng::splitmix64`]), so two
//! independent deployments agree without coordination.
//!
//! ## Usage Example
//!
//! ```rust
//! use es_sampling::{create_sampling_method, SamplingConfig, SamplingKind, SamplingMethod};
//!
//! let config = SamplingConfig::builder()
//!     .sampling_method(SamplingKind::CachedGaussian)
//!     .std(0.05)
//!     .table_size(100_000)
//!     .build()
//!     .unwrap();
//!
//! let sampler = create_sampling_method(&config).unwrap();
//!
//! // Every worker holding `config` reconstructs this exact vector from
//! // the seed alone.
//! let noise = sampler.sample(42, 256).unwrap();
//! let mirror = sampler.resample_inverse(42, 256).unwrap();
//! assert_eq!(noise.len(), 256);
//! assert!(noise.iter().zip(&mirror).all(|(a, b)| *a == -*b));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod factory;
pub mod method;
pub mod rng;
pub mod table;

// Re-exports for convenient access
pub use error::SampleError;
pub use factory::create_sampling_method;
pub use method::{CachedGaussianSampling, GaussianSampling, NoiseSampler, SamplingMethod};
pub use rng::NoiseRng;
pub use table::NoiseTable;

// The configuration layer, re-exported so call sites need one import.
pub use es_core::{ConfigError, SamplingConfig, SamplingKind};
