//! `bms-dash` library crate.
//!
//! The binary (`bms`) is a thin wrapper around this library so that:
//!
//! - the FAQ table and the series generator are testable without a terminal
//! - the TUI and the plain-text subcommands share one implementation

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod faq;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod series;
pub mod tui;
