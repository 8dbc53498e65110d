//! Two-tier color sampling.

use crate::sampler::{weighted_choice, RandomSource, SamplingError};
use traffic_core::ColorPolicy;

const ATTRIBUTE: &str = "colors";

/// Choose a color from the banned and allowed tiers.
///
/// The banned tier holds `banned_probability` of the mass and the allowed tier
/// the remainder, each split evenly across its members. Banned colors are
/// walked first, then allowed colors, both in declaration order.
pub fn sample_color<R: RandomSource + ?Sized>(
    rng: &mut R,
    policy: &ColorPolicy,
) -> Result<String, SamplingError> {
    let banned = policy.banned();
    let allowed = policy.allowed();
    if banned.is_empty() && allowed.is_empty() {
        return Err(SamplingError::EmptyDistribution {
            attribute: ATTRIBUTE,
        });
    }

    let banned_share = tier_share(policy.banned_probability(), banned.len());
    let allowed_share = tier_share(1.0 - policy.banned_probability(), allowed.len());

    let candidates: Vec<(&str, f64)> = banned
        .iter()
        .map(|color| (color.as_str(), banned_share))
        .chain(allowed.iter().map(|color| (color.as_str(), allowed_share)))
        .collect();

    let (color, _) = weighted_choice(rng, &candidates, ATTRIBUTE)?;
    Ok((*color).to_string())
}

fn tier_share(mass: f64, members: usize) -> f64 {
    if members == 0 {
        0.0
    } else {
        mass / members as f64
    }
}
