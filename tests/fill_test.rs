//! End-to-end tests for the fill operations over real docx bytes.

use docfill::archive::Package;
use docfill::content::{self, PROJECT_TITLE};
use docfill::{fill, open_bytes, FillOutcome};

/// Build docx bytes whose body holds one paragraph per entry.
fn docx_with_paragraphs(texts: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for text in texts {
        if text.is_empty() {
            body.push_str("<w:p/>");
        } else {
            body.push_str(&format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"));
        }
    }
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}<w:sectPr><w:pgSz w:w=\"11906\"/></w:sectPr></w:body></w:document>"
    );

    let mut package = Package::new();
    package.set_part(
        "[Content_Types].xml",
        b"<?xml version=\"1.0\"?><Types/>".to_vec(),
    );
    package.set_part("_rels/.rels", b"<Relationships/>".to_vec());
    package.set_part("word/document.xml", document.into_bytes());
    package.to_bytes().unwrap()
}

#[test]
fn fill_overwrites_empty_paragraph_under_heading() {
    let bytes = docx_with_paragraphs(&["Abstract", "", "Technology"]);
    let mut file = open_bytes(&bytes).unwrap();

    let outcome = fill::fill_section(&mut file.document, "Abstract", "X");
    assert_eq!(
        outcome,
        FillOutcome::Filled {
            index: 1,
            inserted: false
        }
    );

    // The edit must survive serialization and re-parsing
    let saved = file.to_bytes().unwrap();
    let reread = open_bytes(&saved).unwrap();
    assert_eq!(
        reread.document.paragraph_texts(),
        vec!["Abstract", "X", "Technology"]
    );
}

#[test]
fn fill_inserts_before_short_paragraph() {
    let bytes = docx_with_paragraphs(&["Abstract", "short text", "Technology"]);
    let mut file = open_bytes(&bytes).unwrap();

    fill::fill_section(&mut file.document, "Abstract", "X");

    let saved = file.to_bytes().unwrap();
    let reread = open_bytes(&saved).unwrap();
    assert_eq!(
        reread.document.paragraph_texts(),
        vec!["Abstract", "X", "short text", "Technology"]
    );
}

#[test]
fn fill_is_noop_when_next_heading_comes_first() {
    let texts = &[
        "Abstract",
        "This paragraph is long enough to not match",
        "Technology",
    ];
    let bytes = docx_with_paragraphs(texts);
    let mut file = open_bytes(&bytes).unwrap();

    let outcome = fill::fill_section(&mut file.document, "Abstract", "X");
    assert_eq!(outcome, FillOutcome::NotFound);

    let saved = file.to_bytes().unwrap();
    let reread = open_bytes(&saved).unwrap();
    assert_eq!(reread.document.paragraph_texts(), texts.to_vec());
}

#[test]
fn fill_is_noop_without_matching_heading() {
    let texts = &["Totally unrelated heading", ""];
    let bytes = docx_with_paragraphs(texts);
    let mut file = open_bytes(&bytes).unwrap();

    let outcome = fill::fill_section(&mut file.document, "Abstract", "X");
    assert_eq!(outcome, FillOutcome::NotFound);
    assert_eq!(file.document.paragraph_texts(), texts.to_vec());
}

#[test]
fn full_report_fill_over_template_shape() {
    let bytes = docx_with_paragraphs(&[
        "XXXX (Project Title)",
        "Abstract",
        "",
        "Introduction",
        "",
        "Technology Used and Implementation Strategy",
        "",
    ]);
    let mut file = open_bytes(&bytes).unwrap();

    let summary = fill::fill_report(&mut file.document);
    assert_eq!(summary.titles_substituted, 1);
    assert_eq!(summary.sections_filled(), 2);

    let saved = file.to_bytes().unwrap();
    let reread = open_bytes(&saved).unwrap();
    let texts = reread.document.paragraph_texts();
    assert_eq!(texts[0], PROJECT_TITLE);
    assert_eq!(
        texts[2],
        content::section_content("Abstract").unwrap()
    );
    assert_eq!(
        texts[4],
        content::section_content("Introduction").unwrap()
    );
    // The Technology section is not filled by the document pass
    assert_eq!(texts[6], "");
}

#[test]
fn multiline_content_round_trips_through_breaks() {
    let bytes = docx_with_paragraphs(&["Introduction", "", "Technology"]);
    let mut file = open_bytes(&bytes).unwrap();

    fill::fill_section(&mut file.document, "Introduction", "1.1 Background\n\nProse.");

    let saved = file.to_bytes().unwrap();
    let reread = open_bytes(&saved).unwrap();
    assert_eq!(
        reread.document.paragraph_texts()[1],
        "1.1 Background\n\nProse."
    );
}

#[test]
fn title_substitution_preserves_run_formatting() {
    let document = concat!(
        "<?xml version=\"1.0\"?>",
        "<w:document xmlns:w=\"ns\"><w:body>",
        "<w:p><w:r><w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr>",
        "<w:t>XXXX (Project Title)</w:t></w:r></w:p>",
        "</w:body></w:document>",
    );
    let mut package = Package::new();
    package.set_part("word/document.xml", document.as_bytes().to_vec());
    let bytes = package.to_bytes().unwrap();

    let mut file = open_bytes(&bytes).unwrap();
    fill::substitute_title(&mut file.document, PROJECT_TITLE);

    let saved = file.to_bytes().unwrap();
    let xml = String::from_utf8(
        open_bytes(&saved)
            .unwrap()
            .package()
            .part("word/document.xml")
            .unwrap()
            .to_vec(),
    )
    .unwrap();
    assert!(xml.contains("<w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr>"));
    assert!(xml.contains(PROJECT_TITLE));
    assert!(!xml.contains("XXXX"));
}
