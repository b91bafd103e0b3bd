//! Input/output helpers.
//!
//! - series CSV export (`export`)
//! - series JSON read/write (`json`)

pub mod export;
pub mod json;

pub use export::*;
pub use json::*;
