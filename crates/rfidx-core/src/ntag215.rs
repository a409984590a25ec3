//! NTAG215 tag memory: the 540-byte overlay, its three codecs, and its
//! transforms (C4, §3.4, §4.4).
//!
//! The canonical storage is a single owned `[u8; 540]`. Every typed view
//! (manufacturer block, capability word, user pages, dynamic lock, the
//! configuration block) is an accessor that decodes from / encodes into a
//! slice of that same array — there is no duplicated storage, so a write
//! through any accessor is immediately visible to the raw page view.

use serde_json::{json, Map, Value};

use crate::byte_utils::{bytes_to_hex, hex_to_bytes, strip_whitespace};
use crate::common::TransformCommand;
use crate::error::CoreError;
use crate::ntag21x::{ManufacturerData, Ntag21xMetadata};

pub const SIZE: usize = 540;
pub const PAGE_SIZE: usize = 4;
pub const PAGE_COUNT: usize = SIZE / PAGE_SIZE;
/// Pages read/written through the JSON codec's `blocks` object (§9 quirk).
pub const JSON_USER_PAGE_COUNT: usize = 126;

const MANUFACTURER_RANGE: std::ops::Range<usize> = 0..12;
const CAPABILITY_RANGE: std::ops::Range<usize> = 12..16;
const USER_MEMORY_RANGE: std::ops::Range<usize> = 16..520;
const DYNAMIC_LOCK_RANGE: std::ops::Range<usize> = 520..523;
const RESERVED_BYTE: usize = 523;
const CONFIGURATION_RANGE: std::ops::Range<usize> = 524..540;

const CFG0_OFFSET: usize = 524;
const CFG1_OFFSET: usize = 528;
const PASSWD_OFFSET: usize = 532;
const PACK_OFFSET: usize = 536;
const CFG_RESERVED_OFFSET: usize = 538;

/// The 16-byte configuration block (last four pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Configuration {
    pub cfg0: [u8; 4],
    pub cfg1: [u8; 4],
    pub passwd: [u8; 4],
    pub pack: [u8; 2],
    pub reserved: [u8; 2],
}

/// The 540-byte NTAG215 memory overlay (pages / bytes / typed structure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ntag215Data(pub [u8; SIZE]);

impl Ntag215Data {
    pub fn zeroed() -> Self {
        Self([0u8; SIZE])
    }

    pub fn from_bytes(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; SIZE] {
        &mut self.0
    }

    /// Read-only page view: page `i` as a 4-byte slice.
    pub fn page(&self, i: usize) -> &[u8] {
        &self.0[i * PAGE_SIZE..i * PAGE_SIZE + PAGE_SIZE]
    }

    pub fn page_mut(&mut self, i: usize) -> &mut [u8] {
        &mut self.0[i * PAGE_SIZE..i * PAGE_SIZE + PAGE_SIZE]
    }

    pub fn manufacturer_data(&self) -> ManufacturerData {
        ManufacturerData::from_bytes(&self.0[MANUFACTURER_RANGE])
    }

    pub fn set_manufacturer_data(&mut self, m: &ManufacturerData) {
        m.write_to(&mut self.0[MANUFACTURER_RANGE]);
    }

    pub fn capability(&self) -> [u8; 4] {
        self.0[CAPABILITY_RANGE].try_into().unwrap()
    }

    pub fn set_capability(&mut self, cap: [u8; 4]) {
        self.0[CAPABILITY_RANGE].copy_from_slice(&cap);
    }

    /// User page `i` (0..126), the editable Type-2 memory region.
    pub fn user_page(&self, i: usize) -> &[u8] {
        let start = USER_MEMORY_RANGE.start + i * PAGE_SIZE;
        &self.0[start..start + PAGE_SIZE]
    }

    pub fn set_user_page(&mut self, i: usize, page: [u8; 4]) {
        let start = USER_MEMORY_RANGE.start + i * PAGE_SIZE;
        self.0[start..start + PAGE_SIZE].copy_from_slice(&page);
    }

    pub fn dynamic_lock(&self) -> [u8; 3] {
        self.0[DYNAMIC_LOCK_RANGE].try_into().unwrap()
    }

    pub fn set_dynamic_lock(&mut self, v: [u8; 3]) {
        self.0[DYNAMIC_LOCK_RANGE].copy_from_slice(&v);
    }

    pub fn reserved(&self) -> u8 {
        self.0[RESERVED_BYTE]
    }

    pub fn set_reserved(&mut self, v: u8) {
        self.0[RESERVED_BYTE] = v;
    }

    pub fn configuration(&self) -> Configuration {
        let b = &self.0[CONFIGURATION_RANGE];
        Configuration {
            cfg0: b[0..4].try_into().unwrap(),
            cfg1: b[4..8].try_into().unwrap(),
            passwd: b[8..12].try_into().unwrap(),
            pack: b[12..14].try_into().unwrap(),
            reserved: b[14..16].try_into().unwrap(),
        }
    }

    pub fn set_configuration(&mut self, cfg: &Configuration) {
        self.0[CFG0_OFFSET..CFG0_OFFSET + 4].copy_from_slice(&cfg.cfg0);
        self.0[CFG1_OFFSET..CFG1_OFFSET + 4].copy_from_slice(&cfg.cfg1);
        self.0[PASSWD_OFFSET..PASSWD_OFFSET + 4].copy_from_slice(&cfg.passwd);
        self.0[PACK_OFFSET..PACK_OFFSET + 2].copy_from_slice(&cfg.pack);
        self.0[CFG_RESERVED_OFFSET..CFG_RESERVED_OFFSET + 2].copy_from_slice(&cfg.reserved);
    }
}

impl Default for Ntag215Data {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Parse a binary dump: either 540 bytes (bare dump, header zeroed) or 596
/// bytes (56-byte metadata header, then the 540-byte dump).
pub fn parse_binary(bytes: &[u8]) -> Result<(Ntag215Data, Ntag21xMetadata), CoreError> {
    match bytes.len() {
        SIZE => {
            let mut data = [0u8; SIZE];
            data.copy_from_slice(bytes);
            Ok((Ntag215Data(data), Ntag21xMetadata::zeroed()))
        }
        n if n == SIZE + Ntag21xMetadata::SIZE => {
            let header = Ntag21xMetadata::from_bytes(&bytes[0..Ntag21xMetadata::SIZE]);
            let mut data = [0u8; SIZE];
            data.copy_from_slice(&bytes[Ntag21xMetadata::SIZE..]);
            Ok((Ntag215Data(data), header))
        }
        n => Err(CoreError::BinaryFileSizeError {
            expected: SIZE,
            actual: n,
        }),
    }
}

/// Serialize as `header || data` (596 bytes).
pub fn serialize_binary(data: &Ntag215Data, header: &Ntag21xMetadata) -> Vec<u8> {
    let mut out = vec![0u8; Ntag21xMetadata::SIZE + SIZE];
    header.write_to(&mut out[0..Ntag21xMetadata::SIZE]);
    out[Ntag21xMetadata::SIZE..].copy_from_slice(&data.0);
    out
}

fn json_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str, CoreError> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::JsonParseError(format!("missing field `{key}`")))
}

/// Parse the Proxmark-style `{ Created, FileType, Card, blocks }` object.
///
/// Per §9, only user pages `0..126` (absolute page indices) are read from
/// `blocks`; higher indices, if present, are ignored. `memory_max` is
/// forced to `0x86` (134) regardless of what `Card.MemoryMax` (if any)
/// contains, matching the historical Proxmark exporter behavior.
pub fn parse_json(s: &str) -> Result<(Ntag215Data, Ntag21xMetadata), CoreError> {
    let root: Value =
        serde_json::from_str(s).map_err(|e| CoreError::JsonParseError(e.to_string()))?;
    let root = root
        .as_object()
        .ok_or_else(|| CoreError::JsonParseError("expected a JSON object".into()))?;

    let card = root
        .get("Card")
        .and_then(Value::as_object)
        .ok_or_else(|| CoreError::JsonParseError("missing `Card` object".into()))?;

    let mut header = Ntag21xMetadata::zeroed();
    header.version = hex_to_bytes(json_str(card, "Version")?, 8)?.try_into().unwrap();
    header.tbo0 = hex_to_bytes(json_str(card, "TBO_0")?, 2)?.try_into().unwrap();
    header.tbo1 = hex_to_bytes(json_str(card, "TBO_1")?, 1)?[0];
    header.signature = hex_to_bytes(json_str(card, "Signature")?, 32)?
        .try_into()
        .unwrap();
    header.counter0 = hex_to_bytes(json_str(card, "Counter0")?, 3)?.try_into().unwrap();
    header.tearing0 = hex_to_bytes(json_str(card, "Tearing0")?, 1)?[0];
    header.counter1 = hex_to_bytes(json_str(card, "Counter1")?, 3)?.try_into().unwrap();
    header.tearing1 = hex_to_bytes(json_str(card, "Tearing1")?, 1)?[0];
    header.counter2 = hex_to_bytes(json_str(card, "Counter2")?, 3)?.try_into().unwrap();
    header.tearing2 = hex_to_bytes(json_str(card, "Tearing2")?, 1)?[0];
    header.memory_max = 0x86;

    let blocks = root
        .get("blocks")
        .and_then(Value::as_object)
        .ok_or_else(|| CoreError::JsonParseError("missing `blocks` object".into()))?;

    let mut data = Ntag215Data::zeroed();
    for page in 0..JSON_USER_PAGE_COUNT {
        let key = page.to_string();
        let Some(hex) = blocks.get(&key).and_then(Value::as_str) else {
            continue;
        };
        let bytes = hex_to_bytes(hex, PAGE_SIZE)?;
        let page_bytes: [u8; 4] = bytes.try_into().unwrap();
        data.0[page * PAGE_SIZE..page * PAGE_SIZE + PAGE_SIZE].copy_from_slice(&page_bytes);
    }

    Ok((data, header))
}

/// Serialize to the Proxmark-style JSON object, covering all 135 pages.
pub fn serialize_json(data: &Ntag215Data, header: &Ntag21xMetadata) -> String {
    let mut blocks = Map::new();
    for page in 0..PAGE_COUNT {
        blocks.insert(page.to_string(), json!(bytes_to_hex(data.page(page))));
    }

    let value = json!({
        "Created": "librfidx",
        "FileType": "mfu",
        "Card": {
            "Version": bytes_to_hex(&header.version),
            "TBO_0": bytes_to_hex(&header.tbo0),
            "TBO_1": bytes_to_hex(&[header.tbo1]),
            "Signature": bytes_to_hex(&header.signature),
            "Counter0": bytes_to_hex(&header.counter0),
            "Tearing0": bytes_to_hex(&[header.tearing0]),
            "Counter1": bytes_to_hex(&header.counter1),
            "Tearing1": bytes_to_hex(&[header.tearing1]),
            "Counter2": bytes_to_hex(&header.counter2),
            "Tearing2": bytes_to_hex(&[header.tearing2]),
        },
        "blocks": blocks,
    });
    serde_json::to_string_pretty(&value).expect("Value tree is always serializable")
}

fn nfc_lines(s: &str) -> impl Iterator<Item = (&str, &str)> {
    s.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        line.split_once(':')
            .map(|(k, v)| (k.trim(), v.trim()))
    })
}

/// Parse the line-oriented Flipper NFC device format.
///
/// Key names reproduce the original exporter's spacing exactly: `Counter 0`,
/// `Tearing 0`, …, and the tag-version bytes are carried under `Mifare
/// version` rather than `Version` (that key is the NFC container format
/// version, fixed at `2` for this family). Only pages `0..126` (the user
/// pages, per `JSON_USER_PAGE_COUNT`) are accepted from `Page N` lines,
/// mirroring the JSON codec's §9 quirk; `tbo0`/`tbo1` have no NFC
/// representation at all and are always zero after a parse. `UID:` is
/// write-only decoration produced by `serialize_nfc`; the manufacturer
/// block (`uid0`/`bcc0`/`uid1`/`bcc1`/`internal`/`lock`) is derived purely
/// from the `Page 0`/`Page 1`/`Page 2` lines, same as the original
/// exporter's union aliasing of those pages onto the manufacturer struct.
pub fn parse_nfc(s: &str) -> Result<(Ntag215Data, Ntag21xMetadata), CoreError> {
    let pairs: Vec<(&str, &str)> = nfc_lines(s).collect();

    let mut header = Ntag21xMetadata::zeroed();
    let mut data = Ntag215Data::zeroed();

    for (key, value) in &pairs {
        match *key {
            "Signature" => {
                header.signature = hex_to_bytes(&strip_whitespace(value), 32)?
                    .try_into()
                    .unwrap();
            }
            "Mifare version" => {
                header.version = hex_to_bytes(&strip_whitespace(value), 8)?
                    .try_into()
                    .unwrap();
            }
            "Counter 0" => {
                header.counter0 = parse_decimal_counter(value)?;
            }
            "Tearing 0" => {
                header.tearing0 = hex_to_bytes(value, 1)?[0];
            }
            "Counter 1" => {
                header.counter1 = parse_decimal_counter(value)?;
            }
            "Tearing 1" => {
                header.tearing1 = hex_to_bytes(value, 1)?[0];
            }
            "Counter 2" => {
                header.counter2 = parse_decimal_counter(value)?;
            }
            "Tearing 2" => {
                header.tearing2 = hex_to_bytes(value, 1)?[0];
            }
            "Pages total" => {
                let total: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| CoreError::NfcParseError(format!("bad `Pages total` `{value}`")))?;
                header.memory_max = total.wrapping_sub(1) as u8;
            }
            _ if key.starts_with("Page ") => {
                let idx: usize = key[5..]
                    .trim()
                    .parse()
                    .map_err(|_| CoreError::NfcParseError(format!("bad page key `{key}`")))?;
                let bytes = hex_to_bytes(value, PAGE_SIZE)?;
                if idx < JSON_USER_PAGE_COUNT {
                    data.0[idx * PAGE_SIZE..idx * PAGE_SIZE + PAGE_SIZE]
                        .copy_from_slice(&bytes);
                }
            }
            _ => {}
        }
    }

    Ok((data, header))
}

fn parse_decimal_counter(s: &str) -> Result<[u8; 3], CoreError> {
    let v: u32 = s
        .trim()
        .parse()
        .map_err(|_| CoreError::NfcParseError(format!("bad decimal counter `{s}`")))?;
    let b = v.to_be_bytes();
    Ok([b[1], b[2], b[3]])
}

fn counter_to_decimal(c: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, c[0], c[1], c[2]])
}

/// Serialize to the line-oriented Flipper NFC device format.
pub fn serialize_nfc(data: &Ntag215Data, header: &Ntag21xMetadata) -> String {
    let manufacturer = data.manufacturer_data();
    let mut out = String::new();
    out.push_str("Filetype: Flipper NFC device\n");
    out.push_str("Version: 2\n");
    out.push_str("Device type: NTAG215\n");
    out.push_str(&format!("UID: {}\n", hex_spaced(&manufacturer.uid7())));
    out.push_str("ATQA: 00 44\n");
    out.push_str("SAK: 00\n");
    out.push_str(&format!("Signature: {}\n", hex_spaced(&header.signature)));
    out.push_str(&format!("Mifare version: {}\n", hex_spaced(&header.version)));
    out.push_str(&format!("Counter 0: {}\n", counter_to_decimal(header.counter0)));
    out.push_str(&format!("Tearing 0: {}\n", bytes_to_hex(&[header.tearing0])));
    out.push_str(&format!("Counter 1: {}\n", counter_to_decimal(header.counter1)));
    out.push_str(&format!("Tearing 1: {}\n", bytes_to_hex(&[header.tearing1])));
    out.push_str(&format!("Counter 2: {}\n", counter_to_decimal(header.counter2)));
    out.push_str(&format!("Tearing 2: {}\n", bytes_to_hex(&[header.tearing2])));
    out.push_str(&format!(
        "Pages total: {}\n",
        header.memory_max as usize + 1
    ));
    for page in 0..PAGE_COUNT {
        out.push_str(&format!("Page {page}: {}\n", hex_spaced(data.page(page))));
    }
    out.push_str("Failed authentication attempts: 0\n");
    out
}

fn hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Zero both structures, then randomize the manufacturer UID (§4.4).
pub fn generate(data: &mut Ntag215Data, header: &mut Ntag21xMetadata) -> Result<(), CoreError> {
    *data = Ntag215Data::zeroed();
    *header = Ntag21xMetadata::zeroed();
    randomize_uid(data)
}

/// Zero every user page plus `configuration.passwd`, `configuration.pack`,
/// and `dynamic_lock`; manufacturer data, capability, and lock bytes are
/// left untouched (§4.4).
pub fn wipe(data: &mut Ntag215Data) {
    for page in 0..126 {
        data.set_user_page(page, [0; 4]);
    }
    data.set_dynamic_lock([0; 3]);
    let mut cfg = data.configuration();
    cfg.passwd = [0; 4];
    cfg.pack = [0; 2];
    data.set_configuration(&cfg);
}

/// Randomize the manufacturer UID in place, failing if the RNG is
/// uninitialized.
pub fn randomize_uid(data: &mut Ntag215Data) -> Result<(), CoreError> {
    let mut manufacturer = data.manufacturer_data();
    manufacturer.randomize_uid()?;
    data.set_manufacturer_data(&manufacturer);
    Ok(())
}

/// Dispatch a [`TransformCommand`] against an existing (or, for `GENERATE`,
/// possibly-absent) tag (§4.4).
pub fn transform(
    data: Option<Ntag215Data>,
    header: Option<Ntag21xMetadata>,
    cmd: TransformCommand,
) -> Result<(Ntag215Data, Ntag21xMetadata), CoreError> {
    match cmd {
        TransformCommand::None => Ok((
            data.unwrap_or_else(Ntag215Data::zeroed),
            header.unwrap_or_else(Ntag21xMetadata::zeroed),
        )),
        TransformCommand::Wipe => {
            let mut data = data.ok_or(CoreError::NumericalOperationFailed)?;
            wipe(&mut data);
            Ok((data, header.unwrap_or_else(Ntag21xMetadata::zeroed)))
        }
        TransformCommand::Generate => {
            let mut data = data.unwrap_or_else(Ntag215Data::zeroed);
            let mut header = header.unwrap_or_else(Ntag21xMetadata::zeroed);
            generate(&mut data, &mut header)?;
            Ok((data, header))
        }
        TransformCommand::RandomizeUid => {
            let mut data = data.ok_or(CoreError::NumericalOperationFailed)?;
            randomize_uid(&mut data)?;
            Ok((data, header.unwrap_or_else(Ntag21xMetadata::zeroed)))
        }
    }
}
