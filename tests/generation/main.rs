//! Generation property tests.
//!
//! These tests drive the public generator API the way a caller would:
//! build a table once, then sample repeatedly with an injected random source.
//! Statistical checks use seeded `StdRng` so failures are reproducible.

mod properties;
mod scenario;
mod scripted;
