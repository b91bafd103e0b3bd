//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - dispatches to the TUI or to the plain-text FAQ / series commands

use chrono::{Local, Utc};
use clap::Parser;

use crate::cli::{Command, FaqArgs, SeriesArgs, SeriesCmdArgs};
use crate::error::AppError;
use crate::faq::FaqTable;
use crate::series::SeriesSource;

/// Entry point for the `bms` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` must be merged before clap reads the `BMS_*` variables.
    let dotenv = crate::config::load_dotenv();
    crate::logging::init(crate::config::log_file().as_deref())?;
    if let Some(path) = dotenv {
        log::debug!("loaded environment from {}", path.display());
    }

    // We want `bms` and `bms --seed 7` to behave like `bms tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Faq(args) => handle_faq(args),
        Command::Series(args) => handle_series(args),
    }
}

fn handle_tui(args: SeriesArgs) -> Result<(), AppError> {
    let params = args.params()?;
    // Surface bad parameters before the terminal switches to the alternate screen.
    crate::series::point_count(&params)?;
    crate::tui::run(params, SeriesSource::from_seed(args.seed))
}

fn handle_faq(args: FaqArgs) -> Result<(), AppError> {
    let faq = FaqTable::builtin();

    match args.query {
        Some(query) if !args.list => {
            let entry = faq.resolve(&query)?;
            print!("{}", crate::report::format_answer(entry));
        }
        _ => print!("{}", crate::report::format_question_list(&faq)),
    }
    Ok(())
}

fn handle_series(args: SeriesCmdArgs) -> Result<(), AppError> {
    let (series, params) = match &args.from {
        Some(path) => {
            let (series, params) = crate::io::read_series_json(path)?.into_series()?;
            log::info!("replaying {} points from {}", series.points.len(), path.display());
            (series, params)
        }
        None => {
            let params = args.series.params()?;
            let source = SeriesSource::from_seed(args.series.seed);
            (source.generate(Utc::now(), &params)?, params)
        }
    };

    if args.no_table {
        print!("{}", crate::report::format_series_summary(&series, &params));
    } else {
        print!("{}", crate::report::format_series_table(&series, &params, &Local));
    }

    if args.plot {
        println!();
        print!("{}", crate::plot::render_series_plot(&series, args.width, args.height));
    }

    if let Some(path) = &args.export {
        crate::io::write_series_csv(path, &series)?;
    }
    if let Some(path) = &args.export_json {
        let generated_at = series.last().map(|p| p.timestamp).unwrap_or_else(Utc::now);
        let doc = crate::io::SeriesDocument::new(&series, &params, generated_at, args.series.seed);
        crate::io::write_series_json(path, &doc)?;
    }

    Ok(())
}

/// Rewrite argv so `bms` defaults to `bms tui`.
///
/// Rules:
/// - `bms`                      -> `bms tui`
/// - `bms --seed 7 ...`         -> `bms tui --seed 7 ...`
/// - `bms --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "faq" | "series");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(argv(&["bms"])), argv(&["bms", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["bms", "--seed", "7"])),
            argv(&["bms", "tui", "--seed", "7"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(rewrite_args(argv(&["bms", "faq", "-l"])), argv(&["bms", "faq", "-l"]));
        assert_eq!(rewrite_args(argv(&["bms", "--help"])), argv(&["bms", "--help"]));
        assert_eq!(rewrite_args(argv(&["bms", "series"])), argv(&["bms", "series"]));
    }
}
