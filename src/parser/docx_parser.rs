//! Docx document parser.

use std::io::Read;
use std::path::Path;

use crate::archive::Package;
use crate::detect::{detect_format_from_path, DOCUMENT_PART};
use crate::error::Result;
use crate::model::{Document, Metadata};

use super::body::parse_document_xml;
use super::core_props::parse_core_properties;
use super::options::{ErrorMode, ParseOptions};

/// Core-properties part name.
const CORE_PART: &str = "docProps/core.xml";

/// Docx document parser.
///
/// Holds the opened package; [`parse`](Self::parse) builds the document
/// model and [`into_package`](Self::into_package) releases the package so
/// callers can write edits back into it.
pub struct DocxParser {
    package: Package,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a docx file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a docx file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify the container signature before reading the whole file
        detect_format_from_path(path)?;

        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a docx package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a docx package from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        crate::detect::detect_format_from_bytes(data)?;
        let package = Package::from_bytes(data)?;
        Ok(Self { package, options })
    }

    /// Parse a docx package from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a docx package from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse the package and return a structured document.
    pub fn parse(&self) -> Result<Document> {
        let xml = String::from_utf8(self.package.required_part(DOCUMENT_PART)?.to_vec())?;
        let parsed = parse_document_xml(&xml)?;

        let metadata = self.parse_metadata()?;
        let mut document =
            Document::from_parsed(metadata, parsed.items, parsed.header, parsed.trailer);
        let count = document.paragraph_count();
        document.metadata.paragraph_count = count;
        Ok(document)
    }

    /// Release the underlying package (for writing edits back).
    pub fn into_package(self) -> Package {
        self.package
    }

    /// The package being parsed.
    pub fn package(&self) -> &Package {
        &self.package
    }

    fn parse_metadata(&self) -> Result<Metadata> {
        let Some(bytes) = self.package.part(CORE_PART) else {
            return Ok(Metadata::default());
        };
        let parse = || -> Result<Metadata> {
            let xml = String::from_utf8(bytes.to_vec())?;
            parse_core_properties(&xml)
        };
        match parse() {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("ignoring malformed {CORE_PART}: {e}");
                Ok(Metadata::default())
            }
            Err(e) => Err(e),
        }
    }
}
