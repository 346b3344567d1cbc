//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::PlotConfig;

/// Plot constant vs non-constant Black-Scholes benchmark timings
#[derive(Parser, Debug, Default)]
#[command(name = "mcbench-plot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Time-steps results file [default: results_time.txt]
    #[arg(long, value_name = "PATH")]
    pub time_file: Option<PathBuf>,

    /// Sample-size results file [default: results_samples.txt]
    #[arg(long, value_name = "PATH")]
    pub samples_file: Option<PathBuf>,

    /// Field delimiter of both files [default: ;]
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Write the SVG to a file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sort every series by x before drawing
    #[arg(long)]
    pub sort_x: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut PlotConfig) {
        if let Some(path) = &self.time_file {
            config.time_file = path.clone();
        }
        if let Some(path) = &self.samples_file {
            config.samples_file = path.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(path) = &self.output {
            config.output = Some(path.clone());
        }
        if self.sort_x {
            config.sort_x = true;
        }
    }

    /// Log filter directive: `error` with `--quiet`, otherwise `env` (the value of
    /// `RUST_LOG`) or `info`.
    pub fn log_filter(&self, env: Option<String>) -> String {
        if self.quiet {
            "error".to_string()
        } else {
            env.unwrap_or_else(|| "info".to_string())
        }
    }
}
