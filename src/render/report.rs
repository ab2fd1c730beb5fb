//! Plain-text report rendering.
//!
//! Produces the banner-formatted dump of every prepared section, the file a
//! user copies from when the document cannot be updated in place.

use crate::content::{report_sections, Section, PROJECT_TITLE};

/// Width of the `=` banner rows.
const BANNER_WIDTH: usize = 80;

/// Render the full prepared-content report with the default title and
/// sections.
pub fn to_report() -> String {
    to_report_with(PROJECT_TITLE, report_sections())
}

/// Render a prepared-content report for the given title and sections.
///
/// Layout, in order: a banner-wrapped header block, the project title line,
/// then each section as a banner-wrapped heading followed by its content.
pub fn to_report_with(title: &str, sections: &[Section]) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!("{} - MINI PROJECT REPORT\n", title.to_uppercase()));
    out.push_str("FILLED CONTENT FOR WORD DOCUMENT\n");
    out.push_str(&banner);
    out.push_str("\n\n");

    out.push_str(&format!("PROJECT TITLE: {title}\n\n"));

    for (i, section) in sections.iter().enumerate() {
        out.push_str(&banner);
        out.push('\n');
        out.push_str(section.report_heading);
        out.push('\n');
        out.push_str(&banner);
        out.push_str("\n\n");
        out.push_str(section.content);
        if i + 1 == sections.len() {
            out.push('\n');
        } else {
            out.push_str("\n\n");
        }
    }

    out
}
