//! ZIP archive reading.
//!
//! Walks the central directory rather than trusting local headers: local
//! headers written with the data-descriptor flag carry zeroed sizes, while
//! the central directory always has the real values.

use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::error::{Error, Result};

use super::{Package, PackageEntry};

/// End-of-central-directory signature: PK\x05\x06.
const EOCD_SIG: u32 = 0x0605_4b50;
/// Central-directory file-header signature: PK\x01\x02.
const CENTRAL_SIG: u32 = 0x0201_4b50;
/// Local file-header signature: PK\x03\x04.
const LOCAL_SIG: u32 = 0x0403_4b50;

const EOCD_LEN: usize = 22;
const CENTRAL_HEADER_LEN: usize = 46;
const LOCAL_HEADER_LEN: usize = 30;

/// Maximum distance from end-of-file to the EOCD record (record + comment).
const EOCD_SEARCH_LIMIT: usize = EOCD_LEN + u16::MAX as usize;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// General-purpose flag bit 0: entry is encrypted.
const FLAG_ENCRYPTED: u16 = 0x0001;

/// Read an entire package from raw archive bytes.
pub fn read_package(data: &[u8]) -> Result<Package> {
    let eocd = find_eocd(data)?;
    let entry_count = u16_at(data, eocd + 10)? as usize;
    let cd_offset = u32_at(data, eocd + 16)? as usize;

    let mut package = Package::new();
    let mut pos = cd_offset;
    for _ in 0..entry_count {
        let (entry, next) = read_central_entry(data, pos)?;
        package.push(entry);
        pos = next;
    }
    Ok(package)
}

/// Locate the EOCD record by scanning backwards from the end of the file.
fn find_eocd(data: &[u8]) -> Result<usize> {
    if data.len() < EOCD_LEN {
        return Err(Error::Corrupted("file too small for a ZIP archive".into()));
    }
    let search_start = data.len().saturating_sub(EOCD_SEARCH_LIMIT);
    let mut pos = data.len() - EOCD_LEN;
    loop {
        if u32_at(data, pos)? == EOCD_SIG {
            // The comment length must agree with the actual tail length,
            // otherwise this is signature-shaped garbage inside the comment.
            let comment_len = u16_at(data, pos + 20)? as usize;
            if pos + EOCD_LEN + comment_len == data.len() {
                return Ok(pos);
            }
        }
        if pos == search_start {
            return Err(Error::Corrupted(
                "end-of-central-directory record not found".into(),
            ));
        }
        pos -= 1;
    }
}

/// Parse one central-directory entry and inflate its data.
///
/// Returns the entry plus the offset of the next central-directory record.
fn read_central_entry(data: &[u8], pos: usize) -> Result<(PackageEntry, usize)> {
    if u32_at(data, pos)? != CENTRAL_SIG {
        return Err(Error::Corrupted("bad central directory signature".into()));
    }
    let flags = u16_at(data, pos + 8)?;
    let method = u16_at(data, pos + 10)?;
    let crc = u32_at(data, pos + 16)?;
    let compressed_size = u32_at(data, pos + 20)? as usize;
    let uncompressed_size = u32_at(data, pos + 24)? as usize;
    let name_len = u16_at(data, pos + 28)? as usize;
    let extra_len = u16_at(data, pos + 30)? as usize;
    let comment_len = u16_at(data, pos + 32)? as usize;
    let local_offset = u32_at(data, pos + 42)? as usize;

    let name_bytes = slice_at(data, pos + CENTRAL_HEADER_LEN, name_len)?;
    let name = String::from_utf8(name_bytes.to_vec())?;

    if flags & FLAG_ENCRYPTED != 0 {
        return Err(Error::Encrypted);
    }

    let raw = local_entry_data(data, local_offset, compressed_size, &name)?;
    let content = match method {
        METHOD_STORED => raw.to_vec(),
        METHOD_DEFLATE => inflate(raw, uncompressed_size, &name)?,
        other => return Err(Error::UnsupportedCompression(other, name)),
    };

    let mut check = flate2::Crc::new();
    check.update(&content);
    if check.sum() != crc {
        return Err(Error::Corrupted(format!("CRC mismatch in entry {name}")));
    }

    let next = pos + CENTRAL_HEADER_LEN + name_len + extra_len + comment_len;
    Ok((PackageEntry { name, data: content }, next))
}

/// Locate an entry's compressed bytes via its local header.
///
/// Name and extra lengths are re-read from the local header; archive
/// writers are allowed to store different extra fields there than in the
/// central directory.
fn local_entry_data<'a>(
    data: &'a [u8],
    offset: usize,
    compressed_size: usize,
    name: &str,
) -> Result<&'a [u8]> {
    if u32_at(data, offset)? != LOCAL_SIG {
        return Err(Error::Corrupted(format!(
            "bad local header signature for entry {name}"
        )));
    }
    let name_len = u16_at(data, offset + 26)? as usize;
    let extra_len = u16_at(data, offset + 28)? as usize;
    let start = offset + LOCAL_HEADER_LEN + name_len + extra_len;
    slice_at(data, start, compressed_size)
}

fn inflate(raw: &[u8], expected_size: usize, name: &str) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(raw);
    let mut content = Vec::with_capacity(expected_size);
    decoder
        .read_to_end(&mut content)
        .map_err(|e| Error::Corrupted(format!("inflate failed for entry {name}: {e}")))?;
    Ok(content)
}

fn u16_at(data: &[u8], pos: usize) -> Result<u16> {
    let b = slice_at(data, pos, 2)?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

fn u32_at(data: &[u8], pos: usize) -> Result<u32> {
    let b = slice_at(data, pos, 4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn slice_at(data: &[u8], pos: usize, len: usize) -> Result<&[u8]> {
    data.get(pos..pos + len)
        .ok_or_else(|| Error::Corrupted("truncated archive record".into()))
}
