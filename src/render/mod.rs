//! Rendering module for text output formats.

mod report;
mod text;

pub use report::{to_report, to_report_with};
pub use text::to_text;
