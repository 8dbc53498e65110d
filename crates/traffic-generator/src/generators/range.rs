//! Bucketed integer sampling for weight and speed.

use crate::sampler::{weighted_choice, RandomSource, SamplingError};
use traffic_core::RangeBucket;

/// Pick a bucket by weight, then a uniform integer inside it.
///
/// Buckets without an upper bound yield their `min` unchanged and consume no
/// second draw. A selected bucket with `min > max` is reported as
/// [`SamplingError::InvalidRange`] without drawing.
pub fn sample_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    buckets: &[RangeBucket],
    attribute: &'static str,
) -> Result<i64, SamplingError> {
    let bucket = weighted_choice(rng, buckets, attribute)?;
    match bucket.max() {
        Some(max) if max < bucket.min() => Err(SamplingError::InvalidRange {
            attribute,
            min: bucket.min(),
            max,
        }),
        Some(max) => Ok(rng.next_in_range(bucket.min(), max)),
        None => Ok(bucket.min()),
    }
}
