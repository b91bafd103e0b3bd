//! Environment-backed configuration.
//!
//! Settings are resolved in this order: CLI flag, process environment, `.env`
//! file, built-in default. clap reads the `BMS_*` variables below directly (see
//! `cli::SeriesArgs`); this module only has to make sure `.env` has been merged
//! into the environment before parsing.

use std::path::PathBuf;

pub const ENV_WINDOW_MINUTES: &str = "BMS_WINDOW_MINUTES";
pub const ENV_INTERVAL_MINUTES: &str = "BMS_INTERVAL_MINUTES";
pub const ENV_BASELINE: &str = "BMS_BASELINE_KW";
pub const ENV_NOISE_STD: &str = "BMS_NOISE_STD";
pub const ENV_BUMP_AMPLITUDE: &str = "BMS_BUMP_AMPLITUDE";
pub const ENV_BUMP_CENTER: &str = "BMS_BUMP_CENTER";
pub const ENV_BUMP_WIDTH: &str = "BMS_BUMP_WIDTH";
pub const ENV_SEED: &str = "BMS_SEED";
pub const ENV_LOG_FILE: &str = "BMS_LOG_FILE";

/// Merge `.env` (if present) into the process environment.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Optional log file; the TUI owns the terminal, so logs are best sent here.
pub fn log_file() -> Option<PathBuf> {
    std::env::var_os(ENV_LOG_FILE)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
