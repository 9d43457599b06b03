//! Character sheet presentation
//!
//! This module is READ-ONLY - it never modifies a character.

pub mod report;

pub use report::{render_json, render_text, report_filename, write_report, ReportOptions};
