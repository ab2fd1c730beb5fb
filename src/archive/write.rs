//! ZIP archive writing.
//!
//! Sizes and checksums are known before any header is written (each part is
//! deflated to memory first), so no data descriptors are emitted and the
//! resulting archive is readable by strict consumers such as Word itself.

use std::io::Write;

use chrono::{Datelike, Local, Timelike};
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

use super::PackageEntry;

const CENTRAL_SIG: u32 = 0x0201_4b50;
const LOCAL_SIG: u32 = 0x0403_4b50;
const EOCD_SIG: u32 = 0x0605_4b50;

/// "Version needed to extract" for deflate entries: 2.0.
const VERSION_NEEDED: u16 = 20;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

struct WrittenEntry {
    name: String,
    name_len: u16,
    method: u16,
    crc: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    local_offset: u32,
    dos_time: u16,
    dos_date: u16,
}

/// Serialize parts into a complete ZIP archive.
pub fn write_package(entries: &[PackageEntry]) -> Result<Vec<u8>> {
    let (dos_time, dos_date) = dos_timestamp();
    let mut out = Vec::new();
    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut crc = flate2::Crc::new();
        crc.update(&entry.data);

        let deflated = deflate(&entry.data)?;
        // Deflate can expand already-compressed media; store those as-is
        let (method, payload) = if deflated.len() < entry.data.len() {
            (METHOD_DEFLATE, deflated)
        } else {
            (METHOD_STORED, entry.data.clone())
        };

        let record = WrittenEntry {
            name: entry.name.clone(),
            name_len: name_len_u16(&entry.name)?,
            method,
            crc: crc.sum(),
            compressed_size: size_u32(payload.len(), &entry.name)?,
            uncompressed_size: size_u32(entry.data.len(), &entry.name)?,
            local_offset: size_u32(out.len(), &entry.name)?,
            dos_time,
            dos_date,
        };
        write_local_header(&mut out, &record);
        out.extend_from_slice(&payload);
        written.push(record);
    }

    let central_offset = out.len();
    for record in &written {
        write_central_header(&mut out, record);
    }
    let central_size = out.len() - central_offset;
    write_eocd(
        &mut out,
        written.len(),
        central_size,
        central_offset,
    )?;
    Ok(out)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn write_local_header(out: &mut Vec<u8>, record: &WrittenEntry) {
    put_u32(out, LOCAL_SIG);
    put_u16(out, VERSION_NEEDED);
    put_u16(out, 0); // general-purpose flags
    put_u16(out, record.method);
    put_u16(out, record.dos_time);
    put_u16(out, record.dos_date);
    put_u32(out, record.crc);
    put_u32(out, record.compressed_size);
    put_u32(out, record.uncompressed_size);
    put_u16(out, record.name_len);
    put_u16(out, 0); // extra field length
    out.extend_from_slice(record.name.as_bytes());
}

fn write_central_header(out: &mut Vec<u8>, record: &WrittenEntry) {
    put_u32(out, CENTRAL_SIG);
    put_u16(out, VERSION_NEEDED); // version made by
    put_u16(out, VERSION_NEEDED);
    put_u16(out, 0); // general-purpose flags
    put_u16(out, record.method);
    put_u16(out, record.dos_time);
    put_u16(out, record.dos_date);
    put_u32(out, record.crc);
    put_u32(out, record.compressed_size);
    put_u32(out, record.uncompressed_size);
    put_u16(out, record.name_len);
    put_u16(out, 0); // extra field length
    put_u16(out, 0); // comment length
    put_u16(out, 0); // disk number start
    put_u16(out, 0); // internal attributes
    put_u32(out, 0); // external attributes
    put_u32(out, record.local_offset);
    out.extend_from_slice(record.name.as_bytes());
}

fn write_eocd(
    out: &mut Vec<u8>,
    entry_count: usize,
    central_size: usize,
    central_offset: usize,
) -> Result<()> {
    let count = u16::try_from(entry_count)
        .map_err(|_| Error::Serialize("too many package parts".into()))?;
    put_u32(out, EOCD_SIG);
    put_u16(out, 0); // disk number
    put_u16(out, 0); // central directory disk
    put_u16(out, count);
    put_u16(out, count);
    put_u32(out, size_u32(central_size, "central directory")?);
    put_u32(out, size_u32(central_offset, "central directory")?);
    put_u16(out, 0); // comment length
    Ok(())
}

/// Current local time in MS-DOS format (2-second resolution, 1980 epoch).
fn dos_timestamp() -> (u16, u16) {
    let now = Local::now();
    let year = now.year().clamp(1980, 2107) as u16;
    let time =
        ((now.hour() as u16) << 11) | ((now.minute() as u16) << 5) | (now.second() as u16 / 2);
    let date = ((year - 1980) << 9) | ((now.month() as u16) << 5) | (now.day() as u16);
    (time, date)
}

fn size_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::Serialize(format!("{what} exceeds 4 GiB")))
}

fn name_len_u16(name: &str) -> Result<u16> {
    u16::try_from(name.len())
        .map_err(|_| Error::Serialize(format!("part name too long: {} bytes", name.len())))
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}
