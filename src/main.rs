//! Command-line interface for road-traffic
//!
//! # Usage Examples
//!
//! ```bash
//! # Print ten transports using ./probability_table.json
//! road-traffic
//!
//! # JSON lines, custom table
//! road-traffic --config my_table.yaml --count 500 --format json > transports.jsonl
//! ```

use clap::Parser;
use road_traffic::Cli;

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut rng = rand::thread_rng();

    road_traffic::run(&cli, &mut rng, &mut out)?;
    Ok(())
}
