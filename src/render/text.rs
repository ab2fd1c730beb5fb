//! Plain text rendering for docx documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text, one line per paragraph.
pub fn to_text(doc: &Document) -> Result<String> {
    Ok(doc.plain_text().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello, world!"));
        doc.add_paragraph(Paragraph::with_text("Second paragraph."));

        let result = to_text(&doc).unwrap();
        assert_eq!(result, "Hello, world!\nSecond paragraph.");
    }

    #[test]
    fn test_to_text_empty_document() {
        let doc = Document::new();
        assert_eq!(to_text(&doc).unwrap(), "");
    }
}
