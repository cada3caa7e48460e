//! # Evostrat Core (configuration layer)
//!
//! Shared configuration and error types for the evostrat noise sampling
//! workspace. This crate owns the boundary between the outside world
//! (TOML files, environment variables, whatever the training harness
//! parses) and the sampling kernel: it produces a validated
//! [`SamplingConfig`] descriptor that `es_sampling`'s factory consumes.
//!
//! The kernel itself never loads configuration; it only reads the
//! descriptor during construction. All field-level validation happens
//! here, once, so that an invalid descriptor can never reach a sampler.
//!
//! ## Usage Example
//!
//! ```rust
//! use es_core::{SamplingConfig, SamplingKind};
//!
//! let config = SamplingConfig::builder()
//!     .sampling_method(SamplingKind::CachedGaussian)
//!     .std(0.05)
//!     .table_size(1_000_000)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(config.sampling_method(), SamplingKind::CachedGaussian);
//! assert_eq!(config.table_size(), Some(1_000_000));
//! ```

pub mod config;
pub mod error;

pub use config::{SamplingConfig, SamplingConfigBuilder, SamplingKind, DEFAULT_TABLE_SEED};
pub use error::ConfigError;
