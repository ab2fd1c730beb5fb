//! # docfill
//!
//! Fill Word (`.docx`) report templates with prepared section content.
//!
//! The library loads a docx package, substitutes the project-title
//! placeholder, locates named sections by scanning paragraph headings, and
//! places prepared prose directly under them. Everything the model does not
//! understand is carried through byte-for-byte, so a saved document keeps
//! its styles, tables, and media intact.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docfill::fill;
//!
//! fn main() -> docfill::Result<()> {
//!     // Open a docx template
//!     let mut file = docfill::open_file("report.docx")?;
//!
//!     // Substitute the title and fill Abstract + Introduction
//!     let summary = fill::fill_report(&mut file.document);
//!     println!("{} section(s) filled", summary.sections_filled());
//!
//!     // Save under a new name
//!     file.save("report-FILLED.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lossless round-trip**: untouched content re-serializes from its
//!   original bytes
//! - **Formatting-preserving substitution**: placeholder replacement works
//!   run by run
//! - **Heuristic section fill**: heading scan with silent no-op on miss
//! - **Text report**: banner-formatted dump of all prepared content for
//!   manual copy-paste

pub mod archive;
pub mod content;
pub mod detect;
pub mod error;
pub mod fill;
pub mod model;
pub mod parser;
pub mod render;
pub mod writer;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx_bytes};
pub use error::{Error, Result};
pub use fill::{fill_report, fill_section, substitute_title, FillOutcome, FillSummary};
pub use model::{BodyItem, Document, Metadata, ParaChild, Paragraph, Run};
pub use parser::{DocxParser, ErrorMode, ParseOptions};

use std::io::Read;
use std::path::Path;

use archive::Package;
use detect::DOCUMENT_PART;

/// Open a docx file.
///
/// # Example
///
/// ```no_run
/// let file = docfill::open_file("report.docx").unwrap();
/// println!("{} paragraphs", file.document.paragraph_count());
/// ```
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<DocxFile> {
    DocxFile::open(path)
}

/// Open a docx file with custom options.
pub fn open_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<DocxFile> {
    DocxFile::open_with_options(path, options)
}

/// Open a docx package from bytes.
pub fn open_bytes(data: &[u8]) -> Result<DocxFile> {
    DocxFile::from_bytes(data)
}

/// Extract plain text from a docx file.
///
/// # Example
///
/// ```no_run
/// let text = docfill::extract_text("report.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = open_file(path)?;
    render::to_text(&file.document)
}

/// An opened docx file: the parsed document plus the package it came from.
///
/// Edits go through [`document`](Self::document); saving re-serializes the
/// main document part into the retained package and writes the archive.
pub struct DocxFile {
    package: Package,
    /// The parsed document model.
    pub document: Document,
}

impl DocxFile {
    /// Open a docx file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a docx file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let parser = DocxParser::open_with_options(path, options)?;
        let document = parser.parse()?;
        Ok(Self {
            package: parser.into_package(),
            document,
        })
    }

    /// Open a docx package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Open a docx package from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let parser = DocxParser::from_bytes_with_options(data, options)?;
        let document = parser.parse()?;
        Ok(Self {
            package: parser.into_package(),
            document,
        })
    }

    /// Open a docx package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Serialize the (possibly edited) document back to docx bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let xml = writer::document_to_xml(&self.document);
        self.package.set_part(DOCUMENT_PART, xml.into_bytes());
        self.package.to_bytes()
    }

    /// Save the document to a new docx file.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// The underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn minimal_docx_bytes() -> Vec<u8> {
        let mut package = Package::new();
        package.set_part("[Content_Types].xml", b"<Types/>".to_vec());
        package.set_part(
            "word/document.xml",
            concat!(
                "<?xml version=\"1.0\"?>",
                "<w:document xmlns:w=\"ns\"><w:body>",
                "<w:p><w:r><w:t>Abstract</w:t></w:r></w:p>",
                "<w:p/>",
                "<w:p><w:r><w:t>Technology</w:t></w:r></w:p>",
                "</w:body></w:document>",
            )
            .as_bytes()
            .to_vec(),
        );
        package.to_bytes().unwrap()
    }

    #[test]
    fn test_open_bytes_and_edit_roundtrip() {
        let mut file = open_bytes(&minimal_docx_bytes()).unwrap();
        assert_eq!(
            file.document.paragraph_texts(),
            vec!["Abstract", "", "Technology"]
        );

        let outcome = fill_section(&mut file.document, "Abstract", "X");
        assert!(outcome.is_filled());

        let bytes = file.to_bytes().unwrap();
        let reread = open_bytes(&bytes).unwrap();
        assert_eq!(
            reread.document.paragraph_texts(),
            vec!["Abstract", "X", "Technology"]
        );
    }

    #[test]
    fn test_untouched_parts_survive_save() {
        let mut file = open_bytes(&minimal_docx_bytes()).unwrap();
        file.document
            .add_paragraph(Paragraph::with_text("appended"));
        let bytes = file.to_bytes().unwrap();
        let reread = open_bytes(&bytes).unwrap();
        assert_eq!(
            reread.package().part("[Content_Types].xml"),
            Some(&b"<Types/>"[..])
        );
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = open_file("/no/such/template.docx");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
