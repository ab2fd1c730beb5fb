//! Section heading scan and fill.
//!
//! The locating heuristic works on plain paragraph text, in document order,
//! and gives up silently when it cannot find a spot for the content. That
//! matches how report templates are actually laid out: a heading paragraph,
//! an empty (or placeholder) paragraph for the body, then the next heading.

use crate::model::{BodyItem, Document, Paragraph};

/// Headings that end a section's content region when scanning forward.
pub const NEXT_SECTION_HEADINGS: &[&str] =
    &["Technology", "Implementation", "Conclusion", "References"];

/// Trimmed paragraphs shorter than this count as insertion placeholders.
pub const SHORT_PARAGRAPH_MAX: usize = 10;

/// Result of a section fill attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Content was placed at the given body index.
    Filled {
        /// Body index of the paragraph now holding the content.
        index: usize,
        /// Whether a new paragraph was inserted (as opposed to overwriting
        /// an empty one).
        inserted: bool,
    },
    /// No heading or no insertion point was found; the document is
    /// unchanged.
    NotFound,
}

impl FillOutcome {
    /// Whether any content was written.
    pub fn is_filled(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

/// Find the named section and place `content` directly under its heading.
///
/// The scan runs over paragraphs in document order:
///
/// 1. The heading is the first paragraph whose trimmed text contains
///    `section_name` case-insensitively. Content is never written into the
///    heading paragraph itself.
/// 2. Past the heading, a non-empty paragraph mentioning one of
///    [`NEXT_SECTION_HEADINGS`] means the section's region ended without an
///    insertion point; the scan stops. Headings contained in the target
///    name itself are exempt, so a target like "Implementation Snapshot"
///    does not stop on its own "Implementation".
/// 3. Otherwise the first empty paragraph is overwritten with the content,
///    and the first non-empty paragraph shorter than
///    [`SHORT_PARAGRAPH_MAX`] characters gets a new content paragraph
///    inserted immediately before it. Either write ends the scan.
///
/// Never errors: a missing heading or a section with no usable spot is a
/// no-op reported through [`FillOutcome::NotFound`].
pub fn fill_section(doc: &mut Document, section_name: &str, content: &str) -> FillOutcome {
    let needle = section_name.to_lowercase();
    let mut located = false;

    let mut index = 0;
    while index < doc.body.len() {
        let BodyItem::Paragraph(paragraph) = &doc.body[index] else {
            index += 1;
            continue;
        };
        let text = paragraph.text();
        let trimmed = text.trim();

        if !located {
            if trimmed.to_lowercase().contains(&needle) {
                located = true;
            }
            index += 1;
            continue;
        }

        if !trimmed.is_empty() && hits_next_heading(trimmed, &needle) {
            log::debug!(
                "section {section_name:?}: reached the next heading without an insertion point"
            );
            return FillOutcome::NotFound;
        }

        if trimmed.is_empty() {
            if let BodyItem::Paragraph(p) = &mut doc.body[index] {
                p.set_text(content);
            }
            return FillOutcome::Filled {
                index,
                inserted: false,
            };
        }

        if trimmed.chars().count() < SHORT_PARAGRAPH_MAX {
            doc.insert_paragraph_before(index, Paragraph::with_text(content));
            return FillOutcome::Filled {
                index,
                inserted: true,
            };
        }

        index += 1;
    }

    if !located {
        log::debug!("section {section_name:?}: no heading paragraph found");
    }
    FillOutcome::NotFound
}

fn hits_next_heading(trimmed: &str, needle: &str) -> bool {
    NEXT_SECTION_HEADINGS
        .iter()
        .filter(|h| !needle.contains(&h.to_lowercase()))
        .any(|h| trimmed.contains(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn doc_with_paragraphs(texts: &[&str]) -> Document {
        let mut doc = Document::new();
        for text in texts {
            doc.add_paragraph(Paragraph::with_text(*text));
        }
        doc
    }

    #[test]
    fn test_empty_paragraph_is_overwritten() {
        let mut doc = doc_with_paragraphs(&["Abstract", "", "Technology"]);
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert_eq!(
            outcome,
            FillOutcome::Filled {
                index: 1,
                inserted: false
            }
        );
        assert_eq!(doc.paragraph_texts(), vec!["Abstract", "X", "Technology"]);
    }

    #[test]
    fn test_short_paragraph_gets_insert_before() {
        let mut doc = doc_with_paragraphs(&["Abstract", "short text", "Technology"]);
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert_eq!(
            outcome,
            FillOutcome::Filled {
                index: 1,
                inserted: true
            }
        );
        assert_eq!(
            doc.paragraph_texts(),
            vec!["Abstract", "X", "short text", "Technology"]
        );
    }

    #[test]
    fn test_long_paragraph_then_next_heading_is_noop() {
        let texts = &[
            "Abstract",
            "This paragraph is long enough to not match",
            "Technology",
        ];
        let mut doc = doc_with_paragraphs(texts);
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert_eq!(outcome, FillOutcome::NotFound);
        assert_eq!(doc.paragraph_texts(), texts.to_vec());
    }

    #[test]
    fn test_missing_heading_is_noop() {
        let texts = &["Introduction", "", "Technology"];
        let mut doc = doc_with_paragraphs(texts);
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert_eq!(outcome, FillOutcome::NotFound);
        assert_eq!(doc.paragraph_texts(), texts.to_vec());
    }

    #[test]
    fn test_heading_match_is_case_insensitive_substring() {
        let mut doc = doc_with_paragraphs(&["1. ABSTRACT", "", "Technology"]);
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert!(outcome.is_filled());
        assert_eq!(doc.paragraph_texts()[1], "X");
    }

    #[test]
    fn test_heading_paragraph_is_never_overwritten() {
        // The heading itself is short (< 10 chars) but content must land
        // after it, not inside it
        let mut doc = doc_with_paragraphs(&["Abstract", "", "Technology"]);
        fill_section(&mut doc, "Abstract", "X");
        assert_eq!(doc.paragraph_texts()[0], "Abstract");
    }

    #[test]
    fn test_scan_ends_at_document_end_without_spot() {
        let texts = &["Abstract", "This closing paragraph is certainly long enough"];
        let mut doc = doc_with_paragraphs(texts);
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert_eq!(outcome, FillOutcome::NotFound);
        assert_eq!(doc.paragraph_texts(), texts.to_vec());
    }

    #[test]
    fn test_scan_skips_long_paragraphs_to_reach_empty_one() {
        let mut doc = doc_with_paragraphs(&[
            "Introduction",
            "Some existing preamble text that stays where it is",
            "",
            "Technology",
        ]);
        let outcome = fill_section(&mut doc, "Introduction", "Y");
        assert_eq!(
            outcome,
            FillOutcome::Filled {
                index: 2,
                inserted: false
            }
        );
        assert_eq!(doc.paragraph_texts()[2], "Y");
    }

    #[test]
    fn test_target_mention_in_next_heading_list_is_ignored() {
        // Filling "Implementation Snapshot" must not stop on its own
        // heading name appearing in the region
        let mut doc = doc_with_paragraphs(&["Implementation", "", "Conclusion"]);
        let outcome = fill_section(&mut doc, "Implementation", "Z");
        assert!(outcome.is_filled());
        assert_eq!(doc.paragraph_texts()[1], "Z");
    }

    #[test]
    fn test_multi_word_target_is_not_stopped_by_its_own_name() {
        let mut doc = doc_with_paragraphs(&[
            "Implementation Snapshot",
            "Implementation details are captured below",
            "",
            "Conclusion",
        ]);
        let outcome = fill_section(&mut doc, "Implementation Snapshot", "Z");
        assert_eq!(
            outcome,
            FillOutcome::Filled {
                index: 2,
                inserted: false
            }
        );
        assert_eq!(doc.paragraph_texts()[2], "Z");
    }

    #[test]
    fn test_raw_body_items_are_skipped() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Abstract"));
        doc.body.push(BodyItem::Raw("<w:tbl/>".to_string()));
        doc.add_paragraph(Paragraph::with_text(""));
        let outcome = fill_section(&mut doc, "Abstract", "X");
        assert_eq!(
            outcome,
            FillOutcome::Filled {
                index: 2,
                inserted: false
            }
        );
    }
}
