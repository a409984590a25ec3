//! Format negotiation (C8): extension-to-[`FileFormat`] mapping and the
//! per-tag-kind codec tables that read and write dumps in any of the three
//! supported textual/binary representations.

use std::fs;
use std::path::Path;

use rfidx_amiibo::AmiiboMemory;
use rfidx_core::common::{FileFormat, TagKind};
use rfidx_core::mfc1k::Mfc1kData;
use rfidx_core::ntag21x::Ntag21xMetadata;
use rfidx_core::ntag215::Ntag215Data;

use crate::dispatch::TagData;
use crate::error::RfidxError;

/// Map a file extension (without the leading dot, case-insensitive) to a
/// [`FileFormat`], §4.8's extension table.
pub fn format_for_extension(path: &str) -> FileFormat {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    FileFormat::from_extension(ext)
}

/// Parse `bytes` as `kind` in `format`.
pub fn parse_tag(kind: TagKind, format: FileFormat, bytes: &[u8]) -> Result<TagData, RfidxError> {
    let text = || std::str::from_utf8(bytes).map_err(|_| RfidxError::FileFormatError);

    match (kind, format) {
        (TagKind::Ntag215, FileFormat::Binary) => {
            let (data, header) = rfidx_core::ntag215::parse_binary(bytes)?;
            Ok(TagData::Ntag215(data, header))
        }
        (TagKind::Ntag215, FileFormat::Json) => {
            let (data, header) = rfidx_core::ntag215::parse_json(text()?)?;
            Ok(TagData::Ntag215(data, header))
        }
        (TagKind::Ntag215, FileFormat::Nfc) => {
            let (data, header) = rfidx_core::ntag215::parse_nfc(text()?)?;
            Ok(TagData::Ntag215(data, header))
        }
        (TagKind::Mfc1k, FileFormat::Binary) => {
            let (data, _header) = rfidx_core::mfc1k::parse_binary(bytes)?;
            Ok(TagData::Mfc1k(data))
        }
        (TagKind::Mfc1k, FileFormat::Json) => {
            let (data, _header) = rfidx_core::mfc1k::parse_json(text()?)?;
            Ok(TagData::Mfc1k(data))
        }
        (TagKind::Mfc1k, FileFormat::Nfc) => {
            let (data, _header) = rfidx_core::mfc1k::parse_nfc(text()?)?;
            Ok(TagData::Mfc1k(data))
        }
        (TagKind::Amiibo, FileFormat::Binary) => {
            let (ntag, header) = rfidx_core::ntag215::parse_binary(bytes)?;
            Ok(TagData::Amiibo(AmiiboMemory::from_ntag215(ntag), header))
        }
        (TagKind::Amiibo, FileFormat::Json) => {
            let (ntag, header) = rfidx_core::ntag215::parse_json(text()?)?;
            Ok(TagData::Amiibo(AmiiboMemory::from_ntag215(ntag), header))
        }
        (TagKind::Amiibo, FileFormat::Nfc) => {
            let (ntag, header) = rfidx_core::ntag215::parse_nfc(text()?)?;
            Ok(TagData::Amiibo(AmiiboMemory::from_ntag215(ntag), header))
        }
        _ => Err(RfidxError::FileFormatError),
    }
}

/// Serialize `data` in `format`, returning raw bytes. Binary formats are
/// emitted as the exact on-wire bytes here; the uppercase-hex rendering
/// used for in-memory string output happens one layer up in
/// [`write_tag`].
fn serialize_tag(data: &TagData, format: FileFormat) -> Result<Vec<u8>, RfidxError> {
    match (data, format) {
        (TagData::Ntag215(d, h), FileFormat::Binary) => {
            Ok(rfidx_core::ntag215::serialize_binary(d, h))
        }
        (TagData::Ntag215(d, h), FileFormat::Json) => {
            Ok(rfidx_core::ntag215::serialize_json(d, h).into_bytes())
        }
        (TagData::Ntag215(d, h), FileFormat::Nfc) => {
            Ok(rfidx_core::ntag215::serialize_nfc(d, h).into_bytes())
        }
        (TagData::Mfc1k(d), FileFormat::Binary) => Ok(rfidx_core::mfc1k::serialize_binary(d)),
        (TagData::Mfc1k(d), FileFormat::Json) => {
            let header = rfidx_core::mfc1k::Mfc1kMetadata::synthesize(d);
            Ok(rfidx_core::mfc1k::serialize_json(d, &header).into_bytes())
        }
        (TagData::Mfc1k(d), FileFormat::Nfc) => {
            let header = rfidx_core::mfc1k::Mfc1kMetadata::synthesize(d);
            Ok(rfidx_core::mfc1k::serialize_nfc(d, &header).into_bytes())
        }
        (TagData::Amiibo(a, h), FileFormat::Binary) => {
            Ok(rfidx_core::ntag215::serialize_binary(&a.0, h))
        }
        (TagData::Amiibo(a, h), FileFormat::Json) => {
            Ok(rfidx_core::ntag215::serialize_json(&a.0, h).into_bytes())
        }
        (TagData::Amiibo(a, h), FileFormat::Nfc) => {
            Ok(rfidx_core::ntag215::serialize_nfc(&a.0, h).into_bytes())
        }
        (_, FileFormat::Eml) | (_, FileFormat::Unknown) => Err(RfidxError::FileFormatError),
    }
}

/// Read a tag dump from `path`, detecting `format` from its extension
/// unless the caller already knows it.
pub fn read_tag(path: &str, kind: TagKind, format: FileFormat) -> Result<TagData, RfidxError> {
    let bytes = fs::read(path).map_err(|e| RfidxError::Io(e.to_string()))?;
    parse_tag(kind, format, &bytes)
}

/// Serialize `data` in `format`. If `path` is `Some`, the bytes are written
/// to that file and `None` is returned; otherwise the bytes are rendered as
/// an in-memory string (uppercase hex for binary, the format's native text
/// otherwise) and returned.
pub fn write_tag(
    data: &TagData,
    format: FileFormat,
    path: Option<&str>,
) -> Result<Option<String>, RfidxError> {
    let bytes = serialize_tag(data, format)?;
    match path {
        Some(path) => {
            fs::write(path, &bytes).map_err(|e| RfidxError::Io(e.to_string()))?;
            Ok(None)
        }
        None => match format {
            FileFormat::Binary => Ok(Some(hex::encode_upper(&bytes))),
            _ => Ok(Some(
                String::from_utf8(bytes).map_err(|_| RfidxError::FileFormatError)?,
            )),
        },
    }
}
