//! Error types for the docfill library.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for docfill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, editing, or saving documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as a docx package.
    #[error("Unknown file format: not a valid docx package")]
    UnknownFormat,

    /// The ZIP container is malformed or truncated.
    #[error("Corrupted docx container: {0}")]
    Corrupted(String),

    /// A ZIP entry uses a compression method this reader does not handle.
    #[error("Unsupported compression method {0} for entry {1}")]
    UnsupportedCompression(u16, String),

    /// The package contains encrypted entries.
    #[error("Document is encrypted")]
    Encrypted,

    /// A required package part is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Error parsing WordprocessingML content.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Part content is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// Error while serializing the document back to XML.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Error while rendering output (text report, plain text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
