//! Weighted choice over an ordered list of candidates.
//!
//! Every transport attribute is drawn through [`weighted_choice`]. The
//! randomness comes from a [`RandomSource`] passed in by the caller, so tests
//! can script exact draws while production code plugs in any `rand::Rng`.

use rand::Rng;
use traffic_core::Weighted;

/// Error type for sampling operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplingError {
    /// No candidate carries positive weight
    #[error("Empty distribution for {attribute}: no candidate has positive weight")]
    EmptyDistribution { attribute: &'static str },

    /// Selected bucket has its lower bound above its upper bound
    #[error("Invalid range for {attribute}: min {min} exceeds max {max}")]
    InvalidRange {
        attribute: &'static str,
        min: i64,
        max: i64,
    },
}

/// Source of uniform random draws.
///
/// Implemented for every `rand::Rng`. Callers that need several independent
/// streams (e.g. one per thread) hold one source each.
pub trait RandomSource {
    /// Uniform draw from `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer from the inclusive range `[min, max]`.
    fn next_in_range(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }
}

/// Negative, NaN or infinite weights count as zero.
fn effective_weight<W: Weighted>(candidate: &W) -> f64 {
    let weight = candidate.weight();
    if weight > 0.0 && weight.is_finite() {
        weight
    } else {
        0.0
    }
}

/// Pick one candidate with probability proportional to its weight.
///
/// Draws `r` from `[0, total)` and walks the candidates in order, returning
/// the first whose running sum reaches `r`. A draw landing exactly on a
/// boundary therefore resolves to the earlier candidate. Zero-weight
/// candidates are never returned.
pub fn weighted_choice<'a, W, R>(
    rng: &mut R,
    candidates: &'a [W],
    attribute: &'static str,
) -> Result<&'a W, SamplingError>
where
    W: Weighted,
    R: RandomSource + ?Sized,
{
    // Finite weights can still overflow when summed; rescale by the largest
    // weight so every term is at most 1 and the sum stays finite.
    let mut scale = 1.0;
    let mut total: f64 = candidates.iter().map(effective_weight).sum();
    if total.is_infinite() {
        scale = candidates.iter().map(effective_weight).fold(0.0, f64::max);
        total = candidates.iter().map(|c| effective_weight(c) / scale).sum();
    }
    if !total.is_finite() || total <= 0.0 {
        return Err(SamplingError::EmptyDistribution { attribute });
    }

    let r = rng.next_unit() * total;
    let mut cumulative = 0.0;
    let mut last_positive = None;

    for candidate in candidates {
        let weight = effective_weight(candidate) / scale;
        if weight == 0.0 {
            continue;
        }
        cumulative += weight;
        last_positive = Some(candidate);
        if r <= cumulative {
            return Ok(candidate);
        }
    }

    // Only reachable if rounding left the running sum just below `r`.
    last_positive.ok_or(SamplingError::EmptyDistribution { attribute })
}
