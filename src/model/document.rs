//! Document-level types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Paragraph;

/// Default prolog for documents built in memory (tests, inserted content).
/// Parsed documents keep their original bytes instead.
const DEFAULT_XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>";
const DEFAULT_XML_TRAILER: &str = "</w:body></w:document>";

/// An ordered item of the document body.
#[derive(Debug, Clone)]
pub enum BodyItem {
    /// A paragraph.
    Paragraph(Paragraph),
    /// Uninterpreted body content (tables, section properties), preserved
    /// byte-for-byte on save.
    Raw(String),
}

/// A parsed docx document: ordered body content plus package metadata.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document metadata from `docProps/core.xml`.
    pub metadata: Metadata,

    /// Body items in document order.
    pub body: Vec<BodyItem>,

    /// `word/document.xml` up to and including the `<w:body>` start tag.
    pub(crate) xml_header: String,

    /// `word/document.xml` from `</w:body>` to the end.
    pub(crate) xml_trailer: String,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            body: Vec::new(),
            xml_header: DEFAULT_XML_HEADER.to_string(),
            xml_trailer: DEFAULT_XML_TRAILER.to_string(),
        }
    }

    pub(crate) fn from_parsed(
        metadata: Metadata,
        body: Vec<BodyItem>,
        xml_header: String,
        xml_trailer: String,
    ) -> Self {
        Self {
            metadata,
            body,
            xml_header,
            xml_trailer,
        }
    }

    /// Append a paragraph to the end of the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(BodyItem::Paragraph(paragraph));
    }

    /// Insert a paragraph immediately before the body item at `index`.
    pub fn insert_paragraph_before(&mut self, index: usize, paragraph: Paragraph) {
        self.body.insert(index, BodyItem::Paragraph(paragraph));
    }

    /// Iterate the document's paragraphs in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|item| match item {
            BodyItem::Paragraph(p) => Some(p),
            BodyItem::Raw(_) => None,
        })
    }

    /// Iterate the document's paragraphs mutably.
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.body.iter_mut().filter_map(|item| match item {
            BodyItem::Paragraph(p) => Some(p),
            BodyItem::Raw(_) => None,
        })
    }

    /// Number of paragraphs in the body.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Plain text of every paragraph, one entry per paragraph.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.paragraphs().map(Paragraph::text).collect()
    }

    /// Check if the document has no body content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraph_texts().join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata from the core-properties part.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub creator: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Last user to modify the document
    pub last_modified_by: Option<String>,

    /// Revision counter
    pub revision: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// Total number of body paragraphs
    pub paragraph_count: usize,
}
