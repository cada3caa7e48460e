//! # Random Number Generation Infrastructure
//!
//! Seedable randomness for the sampling kernel. Everything here is built
//! around one rule: no process-wide or implicit RNG state, ever. Each
//! engine is explicitly seeded and scoped to a call or a construction
//! phase, so that a seed alone reproduces a draw on any worker.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the engine is pinned to ChaCha8, whose output
//!   stream is specified independently of library internals. Two builds on
//!   different platforms produce bit-identical draws for the same seed.
//! - **Efficiency**: zero-allocation batch fills via `&mut [f64]` slices;
//!   normal variates use the Ziggurat algorithm.
//! - **Isolation**: engines are not shared across concurrent calls; the
//!   strategies construct a stack-local engine per call instead.
//!
//! ## Module Structure
//!
//! - [`NoiseRng`]: the seeded engine (uniform + standard-normal draws)
//! - [`splitmix64`] / [`SeedSequence`] / [`worker_seed`]: deterministic
//!   seed derivation with documented constants

mod engine;
mod seed;

// Public re-exports
pub use engine::NoiseRng;
pub use seed::{splitmix64, worker_seed, SeedSequence};
