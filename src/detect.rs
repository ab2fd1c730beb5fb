//! Docx format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local-file-header magic bytes: PK\x03\x04.
const ZIP_MAGIC: &[u8] = &[0x50, 0x4b, 0x03, 0x04];

/// Name of the main document part every docx package carries.
pub(crate) const DOCUMENT_PART: &str = "word/document.xml";

/// Detect the docx container from a file path.
///
/// # Returns
/// * `Ok(())` if the file starts with a ZIP container signature
/// * `Err(Error::UnknownFormat)` otherwise
///
/// This is a cheap magic-byte check; full confirmation that the package
/// contains `word/document.xml` happens when the archive is read.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut magic = [0u8; 4];
    let n = reader.read(&mut magic)?;
    detect_format_from_bytes(&magic[..n])
}

/// Detect the docx container from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if data.len() < ZIP_MAGIC.len() || &data[..ZIP_MAGIC.len()] != ZIP_MAGIC {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check whether a byte slice looks like a docx package.
///
/// Requires the ZIP signature and an entry named `word/document.xml`
/// somewhere in the archive headers (entry names are stored uncompressed,
/// so a raw scan is sufficient without inflating anything).
pub fn is_docx_bytes(data: &[u8]) -> bool {
    if detect_format_from_bytes(data).is_err() {
        return false;
    }
    contains_subslice(data, DOCUMENT_PART.as_bytes())
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() || haystack.len() < needle.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_empty_data() {
        let data: [u8; 0] = [];
        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let data = [0x50, 0x4b];
        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_zip_magic() {
        let data = [0x50, 0x4b, 0x03, 0x04, 0x14, 0x00];
        assert!(detect_format_from_bytes(&data).is_ok());
    }

    #[test]
    fn test_is_docx_bytes() {
        let mut data = vec![0x50, 0x4b, 0x03, 0x04];
        data.extend_from_slice(b"....word/document.xml....");
        assert!(is_docx_bytes(&data));
        assert!(!is_docx_bytes(b"word/document.xml"));
        assert!(!is_docx_bytes(b""));
    }
}
