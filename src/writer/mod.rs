//! Serialization of the document model back to WordprocessingML.
//!
//! Untouched paragraphs and runs are emitted from the bytes they were
//! parsed from, so an edit-free round trip reproduces `word/document.xml`
//! exactly. Dirty paragraphs are rebuilt from their retained properties and
//! current text.

use quick_xml::escape::escape;

use crate::model::{BodyItem, Document, ParaChild, Paragraph, Run};

/// Serialize a document into the full `word/document.xml` part content.
pub fn document_to_xml(doc: &Document) -> String {
    let mut out = String::with_capacity(doc.xml_header.len() + doc.xml_trailer.len() + 1024);
    out.push_str(&doc.xml_header);
    for item in &doc.body {
        match item {
            BodyItem::Paragraph(p) => write_paragraph(&mut out, p),
            BodyItem::Raw(xml) => out.push_str(xml),
        }
    }
    out.push_str(&doc.xml_trailer);
    out
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph) {
    if !paragraph.is_dirty() && !paragraph.raw_xml().is_empty() {
        out.push_str(paragraph.raw_xml());
        return;
    }
    out.push_str("<w:p>");
    if let Some(props) = paragraph.props_xml() {
        out.push_str(props);
    }
    for child in paragraph.children() {
        match child {
            ParaChild::Run(run) => write_run(out, run),
            ParaChild::Raw(xml) => out.push_str(xml),
        }
    }
    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &Run) {
    if !run.is_dirty() && !run.raw_xml().is_empty() {
        out.push_str(run.raw_xml());
        return;
    }
    out.push_str("<w:r>");
    if let Some(props) = run.props_xml() {
        out.push_str(props);
    }
    write_run_text(out, run.text());
    out.push_str("</w:r>");
}

/// Emit run text, turning `\n` into explicit breaks and `\t` into tabs.
///
/// Word ignores literal newlines inside `<w:t>`, so multi-line fill content
/// has to become `<w:br/>` elements to actually render as line breaks.
fn write_run_text(out: &mut String, text: &str) {
    let mut first_line = true;
    for line in text.split('\n') {
        if !first_line {
            out.push_str("<w:br/>");
        }
        first_line = false;

        let mut first_chunk = true;
        for chunk in line.split('\t') {
            if !first_chunk {
                out.push_str("<w:tab/>");
            }
            first_chunk = false;
            if !chunk.is_empty() {
                out.push_str("<w:t xml:space=\"preserve\">");
                out.push_str(&escape(chunk));
                out.push_str("</w:t>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_new_paragraph_serialization() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello & <world>"));
        let xml = document_to_xml(&doc);
        assert!(xml.contains(
            "<w:p><w:r><w:t xml:space=\"preserve\">Hello &amp; &lt;world&gt;</w:t></w:r></w:p>"
        ));
        assert!(xml.starts_with("<?xml"));
        assert!(xml.ends_with("</w:body></w:document>"));
    }

    #[test]
    fn test_newlines_become_breaks() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("line one\n\nline two"));
        let xml = document_to_xml(&doc);
        assert!(xml.contains(
            "<w:t xml:space=\"preserve\">line one</w:t><w:br/><w:br/><w:t xml:space=\"preserve\">line two</w:t>"
        ));
    }

    #[test]
    fn test_tabs_become_tab_elements() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("a\tb"));
        let xml = document_to_xml(&doc);
        assert!(xml.contains(
            "<w:t xml:space=\"preserve\">a</w:t><w:tab/><w:t xml:space=\"preserve\">b</w:t>"
        ));
    }

    #[test]
    fn test_empty_paragraph_serialization() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new());
        let xml = document_to_xml(&doc);
        assert!(xml.contains("<w:p></w:p>"));
    }

    #[test]
    fn test_untouched_document_round_trips_exactly() {
        let source = concat!(
            "<?xml version=\"1.0\"?>",
            "<w:document xmlns:w=\"ns\"><w:body>",
            "<w:p w:rsidR=\"00AB\"><w:pPr><w:jc w:val=\"center\"/></w:pPr>",
            "<w:r><w:rPr><w:b/><w:sz w:val=\"28\"/></w:rPr>",
            "<w:t xml:space=\"preserve\">Project Title </w:t></w:r>",
            "<w:proofErr w:type=\"spellStart\"/></w:p>",
            "<w:tbl><w:tr><w:tc><w:p/></w:tc></w:tr></w:tbl>",
            "<w:sectPr><w:pgSz w:w=\"11906\"/></w:sectPr>",
            "</w:body></w:document>",
        );
        let parsed = crate::parser::test_support::parse_xml(source).unwrap();
        assert_eq!(document_to_xml(&parsed), source);
    }

    #[test]
    fn test_edited_run_keeps_its_properties() {
        let source = concat!(
            "<w:document xmlns:w=\"ns\"><w:body>",
            "<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr>",
            "<w:r><w:rPr><w:b/></w:rPr><w:t>XXXX</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        let mut doc = crate::parser::test_support::parse_xml(source).unwrap();
        for p in doc.paragraphs_mut() {
            p.replace_in_runs("XXXX", "Real Title");
        }
        let xml = document_to_xml(&doc);
        assert!(xml.contains(
            "<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr><w:r><w:rPr><w:b/></w:rPr><w:t xml:space=\"preserve\">Real Title</w:t></w:r></w:p>"
        ));
    }
}
