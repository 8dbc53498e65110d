use crate::scripted::ScriptedSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use traffic_core::{EngineType, ProbabilityTable, Transport, TransportType};
use traffic_generator::{GeneratorError, SamplingError, TransportGenerator};

const SINGLE_OUTCOME_TABLE: &str = r#"{
  "types": [{"name": "car", "probability": 1.0}],
  "weights": [{"min": 1000, "max": 1000, "probability": 1.0}],
  "colors": {"allowed_colors": ["grey"], "banned_colors": [], "banned_probability": 0.0},
  "engines": [{"type": "gas", "probability": 1.0}],
  "cargo_permission_availability": 0.0,
  "cargos": [{"probability": 1.0, "type": "allowed", "name": "none"}],
  "speeds": [{"min": 60, "max": 60, "probability": 1.0}],
  "directions": {"right": 1.0, "wrong": 0.0}
}"#;

fn expected() -> Transport {
    Transport {
        transport_type: TransportType::Car,
        weight: 1000,
        color: "grey".to_string(),
        engine: EngineType::Gas,
        cargo_permission: false,
        cargo: "none".to_string(),
        speed: 60,
        direction_is_right: true,
    }
}

#[test]
fn test_single_outcome_table_is_deterministic() {
    let generator = TransportGenerator::new(ProbabilityTable::from_json(SINGLE_OUTCOME_TABLE).unwrap());

    let mut seeded = StdRng::seed_from_u64(0);
    let mut thread = rand::thread_rng();
    for _ in 0..1_000 {
        assert_eq!(generator.generate(&mut seeded).unwrap(), expected());
        assert_eq!(generator.generate(&mut thread).unwrap(), expected());
    }
}

#[test]
fn test_unit_draws_per_record() {
    let generator = TransportGenerator::new(ProbabilityTable::from_json(SINGLE_OUTCOME_TABLE).unwrap());

    // type, weight bucket, color, engine, permission, cargo, speed bucket, direction
    let mut rng = ScriptedSource::new([0.99; 8]);
    assert_eq!(generator.generate(&mut rng).unwrap(), expected());
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_dyn_random_source() {
    let generator = TransportGenerator::new(ProbabilityTable::from_json(SINGLE_OUTCOME_TABLE).unwrap());
    let mut scripted = ScriptedSource::new([0.0; 8]);
    let rng: &mut dyn traffic_generator::RandomSource = &mut scripted;

    assert_eq!(generator.generate(rng).unwrap(), expected());
}

#[test]
fn test_zero_weight_table_fails_at_sampling() {
    let json = SINGLE_OUTCOME_TABLE.replace(
        r#"{"name": "car", "probability": 1.0}"#,
        r#"{"name": "car", "probability": 0.0}"#,
    );
    let generator = TransportGenerator::new(ProbabilityTable::from_json(&json).unwrap());
    let mut rng = StdRng::seed_from_u64(0);

    let err: GeneratorError = generator.generate(&mut rng).unwrap_err().into();
    assert!(matches!(
        err,
        GeneratorError::Sampling(SamplingError::EmptyDistribution { attribute: "types" })
    ));
    assert_eq!(
        err.to_string(),
        "Sampling error: Empty distribution for types: no candidate has positive weight"
    );
}

#[test]
fn test_malformed_table_converts_to_generator_error() {
    let json = SINGLE_OUTCOME_TABLE.replace(r#""type": "gas""#, r#""type": "steam""#);
    let err: GeneratorError = ProbabilityTable::from_json(&json).unwrap_err().into();

    assert!(matches!(err, GeneratorError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error: Malformed configuration"));
}
