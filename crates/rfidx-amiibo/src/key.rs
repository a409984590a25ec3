//! Amiibo dumped keys: the 80-byte vendor master-key record and the
//! 160-byte data-key/tag-key pair extracted from it (§3.8).

use crate::error::AmiiboError;

pub const DUMPED_KEY_SIZE: usize = 80;
pub const DUMPED_KEY_PAIR_SIZE: usize = DUMPED_KEY_SIZE * 2;

/// A single 80-byte vendor master-key record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpedKey {
    pub hmac_key: [u8; 16],
    pub type_string: [u8; 14],
    pub rfu: u8,
    pub magic_bytes_size: u8,
    pub magic_bytes: [u8; 16],
    pub xor_table: [u8; 32],
}

impl DumpedKey {
    /// Parse and validate one 80-byte record. `magic_bytes_size` must be
    /// 14 or 16; anything else (including the observed failure mode of
    /// values greater than 16) is a hard [`AmiiboError::KeyIoError`].
    pub fn from_bytes(b: &[u8]) -> Result<Self, AmiiboError> {
        if b.len() != DUMPED_KEY_SIZE {
            return Err(AmiiboError::KeyIoError(format!(
                "expected {DUMPED_KEY_SIZE} bytes, got {}",
                b.len()
            )));
        }

        let magic_bytes_size = b[31];
        if magic_bytes_size != 14 && magic_bytes_size != 16 {
            return Err(AmiiboError::KeyIoError(format!(
                "magic_bytes_size must be 14 or 16, got {magic_bytes_size}"
            )));
        }

        Ok(Self {
            hmac_key: b[0..16].try_into().unwrap(),
            type_string: b[16..30].try_into().unwrap(),
            rfu: b[30],
            magic_bytes_size,
            magic_bytes: b[32..48].try_into().unwrap(),
            xor_table: b[48..80].try_into().unwrap(),
        })
    }

    pub fn to_bytes(&self) -> [u8; DUMPED_KEY_SIZE] {
        let mut out = [0u8; DUMPED_KEY_SIZE];
        out[0..16].copy_from_slice(&self.hmac_key);
        out[16..30].copy_from_slice(&self.type_string);
        out[30] = self.rfu;
        out[31] = self.magic_bytes_size;
        out[32..48].copy_from_slice(&self.magic_bytes);
        out[48..80].copy_from_slice(&self.xor_table);
        out
    }

    /// `type_string` with trailing NUL bytes trimmed, e.g. `"unfixed infos"`
    /// for the data key or `"locked secret"` for the tag key.
    pub fn type_str(&self) -> &str {
        let end = self
            .type_string
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.type_string.len());
        std::str::from_utf8(&self.type_string[..end]).unwrap_or("")
    }
}

/// A data-key/tag-key pair, the unit an Amiibo transform needs (§3.8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpedKeyPair {
    pub data: DumpedKey,
    pub tag: DumpedKey,
}

impl DumpedKeyPair {
    /// Parse a 160-byte retail-key file: data key first, then tag key.
    pub fn from_bytes(b: &[u8]) -> Result<Self, AmiiboError> {
        if b.len() != DUMPED_KEY_PAIR_SIZE {
            return Err(AmiiboError::KeyIoError(format!(
                "expected {DUMPED_KEY_PAIR_SIZE} bytes, got {}",
                b.len()
            )));
        }
        let data = DumpedKey::from_bytes(&b[0..DUMPED_KEY_SIZE])?;
        let tag = DumpedKey::from_bytes(&b[DUMPED_KEY_SIZE..DUMPED_KEY_PAIR_SIZE])?;
        Ok(Self { data, tag })
    }
}
