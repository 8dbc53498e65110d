//! Probability table definitions for transport generation.
//!
//! ## Layers
//!
//! **Document types** mirror the on-disk configuration one to one and are
//! produced by `serde`:
//! - `ProbabilityDocument` - the whole file
//! - `TypeEntry`, `BucketEntry`, `ColorsEntry`, `EngineEntry`, `CargoEntry`,
//!   `DirectionsEntry` - one per attribute
//!
//! **Model types** are validated and immutable:
//! - `WeightedOutcome<T>`, `RangeBucket`, `ColorPolicy`, `DirectionPolicy`
//! - `ProbabilityTable` - the root aggregate handed to the generator
//!
//! Every path into a `ProbabilityTable` (JSON, YAML, file, builder) ends in
//! `ProbabilityTableBuilder::build`, which is the single place validation
//! happens.

use crate::types::{CargoType, EngineType, TransportType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for probability table construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read probability table: {0}")]
    Io(#[from] std::io::Error),

    /// The document violates the schema or a declared value domain
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),
}

impl ConfigError {
    fn malformed(message: impl Into<String>) -> Self {
        ConfigError::MalformedConfiguration(message.into())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::malformed(e.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::malformed(e.to_string())
    }
}

// ============================================================================
// Document Types (as written in the configuration file)
// ============================================================================

/// One `types` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: TransportType,
    pub probability: f64,
}

/// One `weights` or `speeds` entry. `max` may be omitted or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketEntry {
    pub min: i64,
    #[serde(default)]
    pub max: Option<i64>,
    pub probability: f64,
}

/// The `colors` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsEntry {
    pub allowed_colors: Vec<String>,
    pub banned_colors: Vec<String>,
    pub banned_probability: f64,
}

/// One `engines` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineEntry {
    #[serde(rename = "type")]
    pub engine_type: EngineType,
    pub probability: f64,
}

/// One `cargos` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoEntry {
    pub probability: f64,
    #[serde(rename = "type")]
    pub cargo_type: CargoType,
    pub name: String,
}

/// The `directions` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsEntry {
    pub right: f64,
    pub wrong: f64,
}

/// Raw configuration document, before domain validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityDocument {
    pub types: Vec<TypeEntry>,
    pub weights: Vec<BucketEntry>,
    pub colors: ColorsEntry,
    pub engines: Vec<EngineEntry>,
    pub cargo_permission_availability: f64,
    pub cargos: Vec<CargoEntry>,
    pub speeds: Vec<BucketEntry>,
    pub directions: DirectionsEntry,
}

// ============================================================================
// Model Types (validated, immutable)
// ============================================================================

/// Anything carrying a relative selection weight.
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// A value together with its relative selection weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedOutcome<T> {
    value: T,
    weight: f64,
}

impl<T> WeightedOutcome<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Weighted for WeightedOutcome<T> {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T> Weighted for (T, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

/// A named cargo and its legal category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cargo {
    name: String,
    kind: CargoType,
}

impl Cargo {
    pub fn new(name: impl Into<String>, kind: CargoType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CargoType {
        self.kind
    }
}

/// A sub-range of a numeric domain with its own selection weight.
///
/// A bucket without an upper bound always yields exactly `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBucket {
    min: i64,
    max: Option<i64>,
    weight: f64,
}

impl RangeBucket {
    /// Bucket covering the inclusive range `[min, max]`.
    pub fn range(min: i64, max: i64, weight: f64) -> Self {
        Self {
            min,
            max: Some(max),
            weight,
        }
    }

    /// Bucket that always yields `value`.
    pub fn fixed(value: i64, weight: f64) -> Self {
        Self {
            min: value,
            max: None,
            weight,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }
}

impl Weighted for RangeBucket {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl From<&BucketEntry> for RangeBucket {
    fn from(entry: &BucketEntry) -> Self {
        Self {
            min: entry.min,
            max: entry.max,
            weight: entry.probability,
        }
    }
}

/// Two-tier color distribution.
///
/// Banned colors share `banned_probability` of the mass, allowed colors share
/// the rest, spread uniformly within each tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPolicy {
    allowed: Vec<String>,
    banned: Vec<String>,
    banned_probability: f64,
}

impl ColorPolicy {
    pub fn new<A, B, S>(allowed: A, banned: B, banned_probability: f64) -> Self
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            banned: banned.into_iter().map(Into::into).collect(),
            banned_probability,
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn banned(&self) -> &[String] {
        &self.banned
    }

    pub fn banned_probability(&self) -> f64 {
        self.banned_probability
    }
}

/// Probability of a transport travelling in the right direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionPolicy {
    right_probability: f64,
    wrong_probability: f64,
}

impl DirectionPolicy {
    pub fn new(right_probability: f64, wrong_probability: f64) -> Self {
        Self {
            right_probability,
            wrong_probability,
        }
    }

    pub fn right_probability(&self) -> f64 {
        self.right_probability
    }

    /// Carried from the configuration; sampling only consults
    /// `right_probability`.
    pub fn wrong_probability(&self) -> f64 {
        self.wrong_probability
    }
}

/// Validated probability data for every transport attribute.
#[derive(Debug, Clone)]
pub struct ProbabilityTable {
    types: Vec<WeightedOutcome<TransportType>>,
    weights: Vec<RangeBucket>,
    colors: ColorPolicy,
    engines: Vec<WeightedOutcome<EngineType>>,
    cargo_permission_availability: f64,
    cargos: Vec<WeightedOutcome<Cargo>>,
    speeds: Vec<RangeBucket>,
    directions: DirectionPolicy,
}

impl ProbabilityTable {
    /// Start building a table programmatically.
    pub fn builder() -> ProbabilityTableBuilder {
        ProbabilityTableBuilder::default()
    }

    /// Load a table from a file. `.yaml` and `.yml` files are parsed as YAML,
    /// everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse a table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: ProbabilityDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Parse a table from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let document: ProbabilityDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document)
    }

    /// Validate a deserialized document.
    pub fn from_document(document: ProbabilityDocument) -> Result<Self, ConfigError> {
        let mut builder = Self::builder()
            .colors(ColorPolicy::new(
                document.colors.allowed_colors,
                document.colors.banned_colors,
                document.colors.banned_probability,
            ))
            .cargo_permission_availability(document.cargo_permission_availability)
            .directions(DirectionPolicy::new(
                document.directions.right,
                document.directions.wrong,
            ));

        for entry in &document.types {
            builder = builder.transport_type(entry.name, entry.probability);
        }
        for entry in &document.weights {
            builder = builder.weight_bucket(entry.into());
        }
        for entry in &document.engines {
            builder = builder.engine(entry.engine_type, entry.probability);
        }
        for entry in document.cargos {
            builder = builder.cargo(entry.name, entry.cargo_type, entry.probability);
        }
        for entry in &document.speeds {
            builder = builder.speed_bucket(entry.into());
        }

        builder.build()
    }

    pub fn types(&self) -> &[WeightedOutcome<TransportType>] {
        &self.types
    }

    pub fn weights(&self) -> &[RangeBucket] {
        &self.weights
    }

    pub fn colors(&self) -> &ColorPolicy {
        &self.colors
    }

    pub fn engines(&self) -> &[WeightedOutcome<EngineType>] {
        &self.engines
    }

    pub fn cargo_permission_availability(&self) -> f64 {
        self.cargo_permission_availability
    }

    pub fn cargos(&self) -> &[WeightedOutcome<Cargo>] {
        &self.cargos
    }

    pub fn speeds(&self) -> &[RangeBucket] {
        &self.speeds
    }

    pub fn directions(&self) -> &DirectionPolicy {
        &self.directions
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Incremental constructor for `ProbabilityTable`.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityTableBuilder {
    types: Vec<WeightedOutcome<TransportType>>,
    weights: Vec<RangeBucket>,
    colors: Option<ColorPolicy>,
    engines: Vec<WeightedOutcome<EngineType>>,
    cargo_permission_availability: f64,
    cargos: Vec<WeightedOutcome<Cargo>>,
    speeds: Vec<RangeBucket>,
    directions: Option<DirectionPolicy>,
}

impl ProbabilityTableBuilder {
    pub fn transport_type(mut self, transport_type: TransportType, weight: f64) -> Self {
        self.types.push(WeightedOutcome::new(transport_type, weight));
        self
    }

    pub fn weight_bucket(mut self, bucket: RangeBucket) -> Self {
        self.weights.push(bucket);
        self
    }

    pub fn colors(mut self, colors: ColorPolicy) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn engine(mut self, engine: EngineType, weight: f64) -> Self {
        self.engines.push(WeightedOutcome::new(engine, weight));
        self
    }

    pub fn cargo_permission_availability(mut self, probability: f64) -> Self {
        self.cargo_permission_availability = probability;
        self
    }

    pub fn cargo(mut self, name: impl Into<String>, kind: CargoType, weight: f64) -> Self {
        self.cargos
            .push(WeightedOutcome::new(Cargo::new(name, kind), weight));
        self
    }

    pub fn speed_bucket(mut self, bucket: RangeBucket) -> Self {
        self.speeds.push(bucket);
        self
    }

    pub fn directions(mut self, directions: DirectionPolicy) -> Self {
        self.directions = Some(directions);
        self
    }

    /// Validate and freeze the table.
    pub fn build(self) -> Result<ProbabilityTable, ConfigError> {
        let colors = self
            .colors
            .ok_or_else(|| ConfigError::malformed("missing field `colors`"))?;
        let directions = self
            .directions
            .ok_or_else(|| ConfigError::malformed("missing field `directions`"))?;

        validate_weights("types", &self.types)?;
        validate_buckets("weights", &self.weights)?;
        validate_probability("colors.banned_probability", colors.banned_probability)?;
        validate_weights("engines", &self.engines)?;
        validate_probability(
            "cargo_permission_availability",
            self.cargo_permission_availability,
        )?;
        validate_weights("cargos", &self.cargos)?;
        validate_buckets("speeds", &self.speeds)?;
        validate_probability("directions.right", directions.right_probability)?;
        validate_probability("directions.wrong", directions.wrong_probability)?;

        Ok(ProbabilityTable {
            types: self.types,
            weights: self.weights,
            colors,
            engines: self.engines,
            cargo_permission_availability: self.cargo_permission_availability,
            cargos: self.cargos,
            speeds: self.speeds,
            directions,
        })
    }
}

fn validate_weight(field: &str, weight: f64) -> Result<(), ConfigError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(ConfigError::malformed(format!(
            "{field}: probability must be a finite non-negative number, got {weight}"
        )));
    }
    Ok(())
}

fn validate_weights<W: Weighted>(field: &str, items: &[W]) -> Result<(), ConfigError> {
    for (idx, item) in items.iter().enumerate() {
        validate_weight(&format!("{field}[{idx}]"), item.weight())?;
    }
    Ok(())
}

fn validate_buckets(field: &str, buckets: &[RangeBucket]) -> Result<(), ConfigError> {
    validate_weights(field, buckets)?;
    for (idx, bucket) in buckets.iter().enumerate() {
        if let Some(max) = bucket.max {
            if bucket.min > max {
                return Err(ConfigError::malformed(format!(
                    "{field}[{idx}]: min {} exceeds max {max}",
                    bucket.min
                )));
            }
        }
    }
    Ok(())
}

fn validate_probability(field: &str, probability: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(ConfigError::malformed(format!(
            "{field}: probability must be within [0, 1], got {probability}"
        )));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
