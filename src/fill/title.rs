//! Project-title placeholder substitution.

use crate::content::{TITLE_PLACEHOLDER_FULL, TITLE_PLACEHOLDER_SHORT};
use crate::model::Document;

/// Replace the project-title placeholder throughout the document.
///
/// Both placeholder forms are recognized: the full `XXXX (Project Title)`
/// token from the title page and the bare `Project Title` that appears in
/// running heads. Substitution happens run by run so formatting survives;
/// when a placeholder straddles run boundaries, the whole paragraph is
/// collapsed to a single run holding the substituted text.
///
/// Silently a no-op when nothing matches. Returns the number of paragraphs
/// touched.
pub fn substitute_title(doc: &mut Document, title: &str) -> usize {
    let mut touched = 0;
    for paragraph in doc.paragraphs_mut() {
        let text = paragraph.text();
        if !contains_placeholder(&text) {
            continue;
        }

        // Run-level pass keeps run formatting intact
        paragraph.replace_in_runs(TITLE_PLACEHOLDER_FULL, title);
        paragraph.replace_in_runs(TITLE_PLACEHOLDER_SHORT, title);

        // Placeholder split across runs: fall back to a paragraph-level
        // replacement over the joined text
        let text = paragraph.text();
        if contains_placeholder(&text) {
            let replaced = text
                .replace(TITLE_PLACEHOLDER_FULL, title)
                .replace(TITLE_PLACEHOLDER_SHORT, title);
            paragraph.set_text(replaced);
        }
        touched += 1;
    }
    if touched > 0 {
        log::debug!("substituted project title in {touched} paragraph(s)");
    }
    touched
}

fn contains_placeholder(text: &str) -> bool {
    text.contains(TITLE_PLACEHOLDER_FULL) || text.contains(TITLE_PLACEHOLDER_SHORT)
}
