//! Per-attribute samplers built on [`weighted_choice`](crate::sampler::weighted_choice).
//!
//! - [`range`] - bucketed integers (weight, speed)
//! - [`threshold`] - Bernoulli draws (direction, cargo permission)
//! - [`color`] - two-tier banned/allowed color choice

pub mod color;
pub mod range;
pub mod threshold;

pub use color::sample_color;
pub use range::sample_range;
pub use threshold::sample_threshold;
