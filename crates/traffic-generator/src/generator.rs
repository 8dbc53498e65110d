//! Transport generator producing one record per call.

use crate::generators::{sample_color, sample_range, sample_threshold};
use crate::sampler::{weighted_choice, RandomSource, SamplingError};
use traffic_core::{ConfigError, ProbabilityTable, Transport};

/// Error type for flows that both load a table and generate from it.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The probability table could not be built
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A distribution in the table could not be sampled
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),
}

/// Generates transports from a fixed probability table.
///
/// The generator never mutates the table; all randomness comes from the
/// source passed to each call.
#[derive(Debug, Clone)]
pub struct TransportGenerator {
    table: ProbabilityTable,
}

impl TransportGenerator {
    /// Create a new generator over the given table.
    pub fn new(table: ProbabilityTable) -> Self {
        Self { table }
    }

    /// Get a reference to the table.
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Generate one transport.
    ///
    /// Attributes are drawn independently in a fixed order: type, weight,
    /// color, engine, cargo permission, cargo, speed, direction. If any
    /// distribution is empty the whole call fails and nothing is returned.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Transport, SamplingError> {
        let table = &self.table;

        let transport_type = *weighted_choice(rng, table.types(), "types")?.value();
        let weight = sample_range(rng, table.weights(), "weights")?;
        let color = sample_color(rng, table.colors())?;
        let engine = *weighted_choice(rng, table.engines(), "engines")?.value();
        let cargo_permission = sample_threshold(rng, table.cargo_permission_availability());
        let cargo = weighted_choice(rng, table.cargos(), "cargos")?
            .value()
            .name()
            .to_string();
        let speed = sample_range(rng, table.speeds(), "speeds")?;
        let direction_is_right = sample_threshold(rng, table.directions().right_probability());

        Ok(Transport {
            transport_type,
            weight,
            color,
            engine,
            cargo_permission,
            cargo,
            speed,
            direction_is_right,
        })
    }

    /// Generate `count` transports lazily.
    pub fn transports<'g, 'r, R: RandomSource + ?Sized>(
        &'g self,
        rng: &'r mut R,
        count: u64,
    ) -> TransportIter<'g, 'r, R> {
        TransportIter {
            generator: self,
            rng,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates transports.
pub struct TransportIter<'g, 'r, R: ?Sized> {
    generator: &'g TransportGenerator,
    rng: &'r mut R,
    remaining: u64,
}

impl<R: RandomSource + ?Sized> Iterator for TransportIter<'_, '_, R> {
    type Item = Result<Transport, SamplingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate(self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
