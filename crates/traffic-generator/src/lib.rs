//! Weighted sampler and transport generator for road-traffic.
//!
//! This crate provides the `TransportGenerator`, which turns a
//! `ProbabilityTable` into `Transport` records. Every attribute is one
//! independent weighted draw; randomness is injected per call through the
//! [`RandomSource`] trait, which every `rand::Rng` implements.
//!
//! # Architecture
//!
//! ```text
//! ProbabilityTable (JSON / YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐      ┌──────────────┐
//! │  TransportGenerator  │◄─────│ RandomSource │
//! │                      │      └──────────────┘
//! │  - table             │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    Transport { type, weight, color, engine, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use traffic_core::ProbabilityTable;
//! use traffic_generator::TransportGenerator;
//!
//! let table = ProbabilityTable::from_json(r#"{
//!   "types": [{"name": "car", "probability": 1.0}],
//!   "weights": [{"min": 1000, "max": 1500, "probability": 1.0}],
//!   "colors": {"allowed_colors": ["white"], "banned_colors": ["pink"], "banned_probability": 0.1},
//!   "engines": [{"type": "electric", "probability": 1.0}],
//!   "cargo_permission_availability": 0.5,
//!   "cargos": [{"probability": 1.0, "type": "allowed", "name": "groceries"}],
//!   "speeds": [{"min": 40, "max": 90, "probability": 1.0}],
//!   "directions": {"right": 0.95, "wrong": 0.05}
//! }"#).unwrap();
//!
//! let generator = TransportGenerator::new(table);
//! let mut rng = StdRng::seed_from_u64(42);
//! let transport = generator.generate(&mut rng).unwrap();
//! assert!((1000..=1500).contains(&transport.weight));
//! ```
//!
//! # Samplers
//!
//! - `weighted_choice` - cumulative walk over weighted candidates (types,
//!   engines, cargos, and bucket selection)
//! - `sample_range` - weighted bucket, then uniform inclusive integer (weight,
//!   speed)
//! - `sample_threshold` - single Bernoulli draw (cargo permission, direction)
//! - `sample_color` - banned tier then allowed tier

pub mod generator;
pub mod generators;
pub mod sampler;

// Re-exports for convenience
pub use generator::{GeneratorError, TransportGenerator, TransportIter};
pub use generators::{sample_color, sample_range, sample_threshold};
pub use sampler::{weighted_choice, RandomSource, SamplingError};
