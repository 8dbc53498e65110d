//! Binary threshold sampling.

use crate::sampler::RandomSource;

/// Returns `true` with the given probability: one unit draw compared against
/// the threshold.
pub fn sample_threshold<R: RandomSource + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.next_unit() < probability
}
