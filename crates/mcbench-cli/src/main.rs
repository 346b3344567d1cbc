//! mcbench-plot - Plot constant vs non-constant Black-Scholes benchmark timings.
//!
//! Reads `results_time.txt` and `results_samples.txt` and draws two stacked panels:
//! the time difference against the number of time steps, and against the sample
//! size on a log axis.
//!
//! # Usage
//!
//! ```bash
//! # Default figure, SVG on standard output
//! mcbench-plot > benchmark.svg
//!
//! # Other inputs, written to a file
//! mcbench-plot --time-file run2/time.txt --samples-file run2/samples.txt -o run2.svg
//!
//! # Panels and styles from a TOML file
//! mcbench-plot --config plot.toml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod output;
mod pipeline;

use cli::Cli;
use config::PlotConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the SVG
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            cli.log_filter(std::env::var("RUST_LOG").ok()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            PlotConfig::from_file(path)
                .with_context(|| format!("Failed to read configuration {}", path.display()))?
        }
        None => PlotConfig::default(),
    };
    cli.apply(&mut config);

    let figure = pipeline::prepare_figure(&config)?;
    output::write_figure(&figure, config.output.as_deref(), cli.quiet)?;

    Ok(())
}
