//! road-traffic library
//!
//! Command-line plumbing around the transport generator: option parsing,
//! probability table loading, and record rendering.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten transports from ./probability_table.json, printed as text blocks
//! road-traffic
//!
//! # A thousand transports as JSON lines from a YAML table
//! road-traffic --config tables/rush_hour.yaml --count 1000 --format json
//!
//! # Show table loading details
//! RUST_LOG=debug road-traffic --count 3
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use traffic_core::{ProbabilityTable, Transport};
use traffic_generator::{RandomSource, TransportGenerator};

#[derive(Parser, Clone, Debug)]
#[command(name = "road-traffic")]
#[command(about = "Generate synthetic road transports from a probability table")]
#[command(long_about = None)]
pub struct Cli {
    /// Probability table to sample from (.json, or .yaml/.yml)
    #[arg(
        long,
        value_name = "PATH",
        default_value = "probability_table.json",
        env = "ROAD_TRAFFIC_CONFIG"
    )]
    pub config: PathBuf,

    /// Number of transports to generate
    #[arg(long, default_value = "10")]
    pub count: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Multi-line block per transport
    Text,
    /// One JSON object per line
    Json,
}

/// Load and validate the probability table at `path`.
pub fn load_table(path: &Path) -> anyhow::Result<ProbabilityTable> {
    let table = ProbabilityTable::from_file(path)
        .with_context(|| format!("Failed to load probability table: {path:?}"))?;

    tracing::debug!(
        path = %path.display(),
        types = table.types().len(),
        weight_buckets = table.weights().len(),
        engines = table.engines().len(),
        cargos = table.cargos().len(),
        speed_buckets = table.speeds().len(),
        "Loaded probability table"
    );
    tracing::trace!(?table, "Probability table contents");

    Ok(table)
}

/// Render one transport in the requested format, without a trailing newline.
pub fn render(transport: &Transport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(transport.to_string()),
        OutputFormat::Json => {
            serde_json::to_string(transport).context("Failed to serialize transport")
        }
    }
}

/// Generate `cli.count` transports and write them to `out`.
///
/// Returns the number of transports written. Stops at the first sampling
/// failure; records already written stay written.
pub fn run<R, W>(cli: &Cli, rng: &mut R, out: &mut W) -> anyhow::Result<u64>
where
    R: RandomSource + ?Sized,
    W: Write,
{
    let table = load_table(&cli.config)?;
    let generator = TransportGenerator::new(table);

    tracing::info!(
        config = %cli.config.display(),
        count = cli.count,
        format = ?cli.format,
        "Generating transports"
    );

    let mut written = 0;
    for (index, transport) in generator.transports(rng, cli.count).enumerate() {
        let transport =
            transport.with_context(|| format!("Failed to generate transport #{index}"))?;
        writeln!(out, "{}", render(&transport, cli.format)?).context("Failed to write output")?;
        written += 1;
    }

    out.flush().context("Failed to flush output")?;
    tracing::info!(written, "Generation complete");

    Ok(written)
}
