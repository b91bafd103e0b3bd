//! Command-line parsing for the BMS anomaly dashboard.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! FAQ table, the series generator, and the TUI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config;
use crate::domain::SeriesParams;
use crate::error::AppError;
use crate::series::duration_from_minutes;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bms", version, about = "Data Center BMS anomaly FAQ & power trend demo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard (default).
    Tui(SeriesArgs),
    /// List FAQ questions or print the answer to one of them.
    Faq(FaqArgs),
    /// Print a demo power series, optionally plotted and/or exported.
    Series(SeriesCmdArgs),
}

#[derive(Debug, Args, Clone)]
pub struct FaqArgs {
    /// List all questions with their index.
    #[arg(short, long)]
    pub list: bool,

    /// Question text (exact) or its 1-based index from `--list`.
    pub query: Option<String>,
}

/// Shape of the synthetic power series.
#[derive(Debug, Args, Clone)]
pub struct SeriesArgs {
    /// Trailing window length in minutes.
    #[arg(long, env = config::ENV_WINDOW_MINUTES, default_value_t = SeriesParams::DEFAULT_WINDOW_MINUTES)]
    pub window_minutes: i64,

    /// Spacing between samples in minutes.
    #[arg(long, env = config::ENV_INTERVAL_MINUTES, default_value_t = SeriesParams::DEFAULT_INTERVAL_MINUTES)]
    pub interval_minutes: i64,

    /// Baseline power draw (kW).
    #[arg(long, env = config::ENV_BASELINE, default_value_t = SeriesParams::DEFAULT_BASELINE)]
    pub baseline: f64,

    /// Standard deviation of the Gaussian noise (kW). 0 disables noise.
    #[arg(long, env = config::ENV_NOISE_STD, default_value_t = SeriesParams::DEFAULT_NOISE_STD)]
    pub noise_std: f64,

    /// Peak height of the load bump (kW).
    #[arg(long, env = config::ENV_BUMP_AMPLITUDE, default_value_t = SeriesParams::DEFAULT_BUMP_AMPLITUDE)]
    pub bump_amplitude: f64,

    /// Bump center as a fraction of the series length.
    #[arg(long, env = config::ENV_BUMP_CENTER, default_value_t = SeriesParams::DEFAULT_BUMP_CENTER)]
    pub bump_center: f64,

    /// Bump width (sigma) as a fraction of the series length.
    #[arg(long, env = config::ENV_BUMP_WIDTH, default_value_t = SeriesParams::DEFAULT_BUMP_WIDTH)]
    pub bump_width: f64,

    /// Fixed RNG seed. Without it every render draws fresh noise.
    #[arg(long, env = config::ENV_SEED)]
    pub seed: Option<u64>,
}

impl SeriesArgs {
    pub fn params(&self) -> Result<SeriesParams, AppError> {
        Ok(SeriesParams {
            window: duration_from_minutes(self.window_minutes, "Window")?,
            interval: duration_from_minutes(self.interval_minutes, "Sample interval")?,
            baseline: self.baseline,
            noise_std: self.noise_std,
            bump_amplitude: self.bump_amplitude,
            bump_center_frac: self.bump_center,
            bump_width_frac: self.bump_width,
        })
    }
}

#[derive(Debug, Args, Clone)]
pub struct SeriesCmdArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Render an ASCII plot after the table.
    #[arg(long)]
    pub plot: bool,

    /// Skip the per-point table.
    #[arg(long)]
    pub no_table: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the series to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the series (with its parameters) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Show a series previously saved with `--export-json` instead of generating one.
    #[arg(long, value_name = "JSON", conflicts_with = "export_json")]
    pub from: Option<PathBuf>,
}
