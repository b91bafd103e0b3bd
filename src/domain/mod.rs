//! Domain types used throughout the dashboard.
//!
//! This module defines:
//!
//! - the FAQ row type (`QaEntry`)
//! - the demo series point and its generator parameters (`SeriesPoint`, `SeriesParams`)
//! - the labelled chart payload (`DemoSeries`)

pub mod types;

pub use types::*;
