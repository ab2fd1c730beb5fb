//! ZIP container support for docx packages.
//!
//! A docx file is an OPC package: a ZIP archive of XML parts plus media.
//! Only the two compression methods that appear in practice are handled
//! (stored and deflate); everything else is an error. Parts are kept in
//! archive order so a round-trip rewrites the package with every untouched
//! part byte-for-byte identical.

mod read;
mod write;

pub use read::read_package;
pub use write::write_package;

use crate::error::{Error, Result};

/// A single named part of the package.
#[derive(Debug, Clone)]
pub struct PackageEntry {
    /// Entry name, e.g. `word/document.xml`.
    pub name: String,
    /// Uncompressed part content.
    pub data: Vec<u8>,
}

/// An in-memory docx package: ordered parts, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct Package {
    entries: Vec<PackageEntry>,
}

impl Package {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a package from raw archive bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        read_package(data)
    }

    /// Serialize the package back to archive bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        write_package(&self.entries)
    }

    /// Number of parts in the package.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the package has no parts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parts in archive order.
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    /// Look up a part's content by name.
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.data.as_slice())
    }

    /// Look up a required part, erroring if absent.
    pub fn required_part(&self, name: &str) -> Result<&[u8]> {
        self.part(name)
            .ok_or_else(|| Error::MissingPart(name.to_string()))
    }

    /// Replace a part's content, or append it if the package lacks it.
    pub fn set_part(&mut self, name: &str, data: Vec<u8>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.data = data;
        } else {
            self.entries.push(PackageEntry {
                name: name.to_string(),
                data,
            });
        }
    }

    pub(crate) fn push(&mut self, entry: PackageEntry) {
        self.entries.push(entry);
    }
}
