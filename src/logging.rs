//! Logger setup.
//!
//! All modules log through the `log` facade. `env_logger` is the backend:
//! `RUST_LOG` picks the filter (default `warn`), and `BMS_LOG_FILE` redirects
//! output away from stderr so it does not bleed into the TUI's alternate screen.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

const DEFAULT_FILTER: &str = "warn";

/// Install the global logger. Call once, before any other work.
pub fn init(log_file: Option<&Path>) -> Result<(), AppError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AppError::usage(format!("Failed to open log file '{}': {e}", path.display())))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|e| AppError::runtime(format!("Failed to initialize logger: {e}")))
}
