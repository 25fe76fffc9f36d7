//! Output formatting module
//!
//! Formats the console report and the matching run-log lines.

mod formatter;

pub use formatter::ReportFormatter;
