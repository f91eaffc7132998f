//! Scope table formatting and display
//!
//! This module provides formatters for writing scope table rows:
//! - Line output, optionally colored (`lines`)
//! - JSON output (`json`)
//! - Check reports with per-line diffs (`report`)

mod config;
mod json;
mod lines;
mod report;

pub use config::OutputConfig;
pub use json::{print_json, rows_to_json};
pub use lines::{LineFormatter, render_plain};
pub use report::{print_report, write_report};
