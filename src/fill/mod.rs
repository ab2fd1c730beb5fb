//! Filling operations: title substitution and section content placement.

mod section;
mod title;

pub use section::{fill_section, FillOutcome, NEXT_SECTION_HEADINGS, SHORT_PARAGRAPH_MAX};
pub use title::substitute_title;

use crate::content::{self, PROJECT_TITLE};
use crate::model::Document;

/// Sections written into the document itself. The remaining prepared
/// sections exist only in the dumped text report; the template keeps its
/// own headings for them.
pub const FILLED_SECTIONS: &[&str] = &["Abstract", "Introduction"];

/// What a whole-document fill pass did.
#[derive(Debug, Clone)]
pub struct FillSummary {
    /// Paragraphs touched by title substitution.
    pub titles_substituted: usize,
    /// Per-section outcomes, in fill order.
    pub sections: Vec<(&'static str, FillOutcome)>,
}

impl FillSummary {
    /// Number of sections whose content was actually placed.
    pub fn sections_filled(&self) -> usize {
        self.sections.iter().filter(|(_, o)| o.is_filled()).count()
    }
}

/// Run the full report fill over a document: substitute the project title,
/// then place the prepared Abstract and Introduction content under their
/// headings.
///
/// Sections that cannot be located are skipped silently, exactly like the
/// title pass; the summary is the only record of what happened.
pub fn fill_report(doc: &mut Document) -> FillSummary {
    let titles_substituted = substitute_title(doc, PROJECT_TITLE);

    let mut sections = Vec::with_capacity(FILLED_SECTIONS.len());
    for name in FILLED_SECTIONS {
        let outcome = match content::section_content(name) {
            Some(text) => fill_section(doc, name, text),
            None => FillOutcome::NotFound,
        };
        sections.push((*name, outcome));
    }

    FillSummary {
        titles_substituted,
        sections,
    }
}
