//! Core types for road-traffic.
//!
//! This crate holds the probability configuration model and the record type
//! produced from it:
//!
//! - [`ProbabilityTable`] - validated per-attribute weighted alternatives
//! - [`WeightedOutcome`], [`RangeBucket`], [`ColorPolicy`], [`DirectionPolicy`]
//! - [`TransportType`], [`EngineType`], [`CargoType`] - closed vocabularies
//! - [`Transport`] - one generated vehicle
//!
//! # Architecture
//!
//! ```text
//! traffic-core (this crate)
//!    │
//!    ├─── traffic-generator   (samples Transport values from a ProbabilityTable)
//!    │
//!    └─── road-traffic        (CLI: loads a table, prints generated records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use traffic_core::{ColorPolicy, DirectionPolicy, ProbabilityTable, RangeBucket, TransportType};
//!
//! let table = ProbabilityTable::builder()
//!     .transport_type(TransportType::Car, 1.0)
//!     .weight_bucket(RangeBucket::range(900, 1500, 1.0))
//!     .colors(ColorPolicy::new(["white", "black"], ["pink"], 0.1))
//!     .directions(DirectionPolicy::new(0.95, 0.05))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.weights()[0].max(), Some(1500));
//! ```

pub mod table;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use table::{
    Cargo, ColorPolicy, ConfigError, DirectionPolicy, ProbabilityDocument, ProbabilityTable,
    ProbabilityTableBuilder, RangeBucket, Weighted, WeightedOutcome,
};
pub use transport::Transport;
pub use types::{CargoType, EngineType, TransportType};
