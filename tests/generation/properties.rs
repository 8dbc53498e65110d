use crate::scripted::ScriptedSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use traffic_core::{ColorPolicy, EngineType, RangeBucket, WeightedOutcome};
use traffic_generator::{
    sample_color, sample_range, sample_threshold, weighted_choice, SamplingError,
};

#[test]
fn test_engine_frequencies_match_weights() {
    let engines = vec![
        WeightedOutcome::new(EngineType::Gasoline, 5.0),
        WeightedOutcome::new(EngineType::Hybrid, 3.0),
        WeightedOutcome::new(EngineType::Electric, 2.0),
    ];
    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 100_000;

    let mut counts: HashMap<EngineType, u64> = HashMap::new();
    for _ in 0..draws {
        let engine = *weighted_choice(&mut rng, &engines, "engines").unwrap().value();
        *counts.entry(engine).or_default() += 1;
    }

    for (engine, expected) in [
        (EngineType::Gasoline, 0.5),
        (EngineType::Hybrid, 0.3),
        (EngineType::Electric, 0.2),
    ] {
        let frequency = counts[&engine] as f64 / draws as f64;
        assert!(
            (frequency - expected).abs() < 0.01,
            "{engine}: {frequency} vs {expected}"
        );
    }
}

#[test]
fn test_boundary_draw_picks_earlier_outcome() {
    let engines = vec![
        WeightedOutcome::new(EngineType::Gas, 0.5),
        WeightedOutcome::new(EngineType::Hybrid, 0.5),
    ];
    let mut rng = ScriptedSource::new([0.5]);

    let chosen = weighted_choice(&mut rng, &engines, "engines").unwrap();
    assert_eq!(*chosen.value(), EngineType::Gas);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_range_inclusivity() {
    let buckets = [RangeBucket::range(5, 10, 1.0)];
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = [0_u32; 6];

    for _ in 0..10_000 {
        let value = sample_range(&mut rng, &buckets, "weights").unwrap();
        assert!((5..=10).contains(&value), "{value} outside [5, 10]");
        seen[(value - 5) as usize] += 1;
    }

    assert!(seen.iter().all(|&count| count > 0), "{seen:?}");
}

#[test]
fn test_fixed_value_bucket() {
    let buckets = [RangeBucket::fixed(7, 0.3)];
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..10_000 {
        assert_eq!(sample_range(&mut rng, &buckets, "speeds").unwrap(), 7);
    }
}

#[test]
fn test_threshold_extremes() {
    let mut rng = StdRng::seed_from_u64(5);

    assert!((0..10_000).all(|_| !sample_threshold(&mut rng, 0.0)));
    assert!((0..10_000).all(|_| sample_threshold(&mut rng, 1.0)));
}

#[test]
fn test_color_tiers() {
    let policy = ColorPolicy::new(["white", "black", "silver"], ["pink", "neon"], 0.3);
    let mut rng = StdRng::seed_from_u64(31);
    let draws = 100_000;

    let mut banned = 0_u64;
    let mut pink = 0_u64;
    for _ in 0..draws {
        let color = sample_color(&mut rng, &policy).unwrap();
        if policy.banned().contains(&color) {
            banned += 1;
            if color == "pink" {
                pink += 1;
            }
        }
    }

    let banned_frequency = banned as f64 / draws as f64;
    assert!((banned_frequency - 0.3).abs() < 0.01, "{banned_frequency}");

    let pink_share = pink as f64 / banned as f64;
    assert!((pink_share - 0.5).abs() < 0.02, "{pink_share}");
}

#[test]
fn test_empty_colors() {
    let policy = ColorPolicy::new(Vec::<String>::new(), Vec::new(), 0.3);
    let mut rng = StdRng::seed_from_u64(31);

    assert_eq!(
        sample_color(&mut rng, &policy),
        Err(SamplingError::EmptyDistribution { attribute: "colors" })
    );
}
