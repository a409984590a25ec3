//! The Amiibo application-layer view over NTAG215 memory (§3.7).
//!
//! `AmiiboMemory` wraps [`rfidx_core::ntag215::Ntag215Data`] rather than
//! duplicating storage: the 504-byte user-memory region of the NTAG215
//! layout is exactly `fixed_a5 | write_counter | unknown_1 | tag_configs |
//! tag_hash | model_info | keygen_salt | data_hash | application_data`, so
//! every Amiibo field lives at a fixed offset inside the same canonical
//! byte array NTAG215 already owns.

use rfidx_core::ntag215::{Ntag215Data, SIZE as NTAG215_SIZE};

pub const SIZE: usize = NTAG215_SIZE;

const FIXED_A5: usize = 16;
const WRITE_COUNTER: std::ops::Range<usize> = 17..19;
const UNKNOWN_1: usize = 19;
const TAG_CONFIGS: std::ops::Range<usize> = 20..52;
const TAG_HASH: std::ops::Range<usize> = 52..84;
const MODEL_INFO: std::ops::Range<usize> = 84..96;
const KEYGEN_SALT: std::ops::Range<usize> = 96..128;
const DATA_HASH: std::ops::Range<usize> = 128..160;
const APPLICATION_DATA: std::ops::Range<usize> = 160..520;

pub const TAG_CONFIGS_LEN: usize = 32;
pub const APPLICATION_DATA_LEN: usize = 360;
/// `tag_configs || application_data`, the AES-CTR encrypted region (§3.7,
/// §4.6.2).
pub const ENCRYPTED_REGION_LEN: usize = TAG_CONFIGS_LEN + APPLICATION_DATA_LEN;

const _: () = assert!(SIZE == 540);
const _: () = assert!(TAG_CONFIGS.end - TAG_CONFIGS.start == TAG_CONFIGS_LEN);
const _: () = assert!(APPLICATION_DATA.end - APPLICATION_DATA.start == APPLICATION_DATA_LEN);
const _: () = assert!(TAG_HASH.end - TAG_HASH.start == 32);
const _: () = assert!(DATA_HASH.end - DATA_HASH.start == 32);
const _: () = assert!(MODEL_INFO.end - MODEL_INFO.start == 12);
const _: () = assert!(KEYGEN_SALT.end - KEYGEN_SALT.start == 32);

/// An Amiibo, laid out as NTAG215 memory (§3.7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmiiboMemory(pub Ntag215Data);

impl AmiiboMemory {
    pub fn zeroed() -> Self {
        Self(Ntag215Data::zeroed())
    }

    pub fn from_ntag215(data: Ntag215Data) -> Self {
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8; SIZE] {
        self.0.as_bytes()
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; SIZE] {
        self.0.as_bytes_mut()
    }

    pub fn fixed_a5(&self) -> u8 {
        self.0.as_bytes()[FIXED_A5]
    }

    pub fn set_fixed_a5(&mut self, v: u8) {
        self.0.as_bytes_mut()[FIXED_A5] = v;
    }

    pub fn write_counter(&self) -> [u8; 2] {
        self.0.as_bytes()[WRITE_COUNTER].try_into().unwrap()
    }

    pub fn set_write_counter(&mut self, v: [u8; 2]) {
        self.0.as_bytes_mut()[WRITE_COUNTER].copy_from_slice(&v);
    }

    pub fn unknown_1(&self) -> u8 {
        self.0.as_bytes()[UNKNOWN_1]
    }

    pub fn tag_configs(&self) -> [u8; TAG_CONFIGS_LEN] {
        self.0.as_bytes()[TAG_CONFIGS].try_into().unwrap()
    }

    pub fn set_tag_configs(&mut self, v: &[u8]) {
        self.0.as_bytes_mut()[TAG_CONFIGS].copy_from_slice(v);
    }

    pub fn tag_hash(&self) -> [u8; 32] {
        self.0.as_bytes()[TAG_HASH].try_into().unwrap()
    }

    pub fn set_tag_hash(&mut self, v: &[u8]) {
        self.0.as_bytes_mut()[TAG_HASH].copy_from_slice(v);
    }

    pub fn model_info(&self) -> [u8; 12] {
        self.0.as_bytes()[MODEL_INFO].try_into().unwrap()
    }

    pub fn set_model_info(&mut self, v: &[u8]) {
        self.0.as_bytes_mut()[MODEL_INFO].copy_from_slice(v);
    }

    pub fn keygen_salt(&self) -> [u8; 32] {
        self.0.as_bytes()[KEYGEN_SALT].try_into().unwrap()
    }

    pub fn set_keygen_salt(&mut self, v: &[u8]) {
        self.0.as_bytes_mut()[KEYGEN_SALT].copy_from_slice(v);
    }

    pub fn data_hash(&self) -> [u8; 32] {
        self.0.as_bytes()[DATA_HASH].try_into().unwrap()
    }

    pub fn set_data_hash(&mut self, v: &[u8]) {
        self.0.as_bytes_mut()[DATA_HASH].copy_from_slice(v);
    }

    pub fn application_data(&self) -> [u8; APPLICATION_DATA_LEN] {
        self.0.as_bytes()[APPLICATION_DATA].try_into().unwrap()
    }

    pub fn set_application_data(&mut self, v: &[u8]) {
        self.0.as_bytes_mut()[APPLICATION_DATA].copy_from_slice(v);
    }

    /// `tag_configs || application_data`, the region AES-CTR encryption
    /// covers (§4.6.2).
    pub fn encrypted_region(&self) -> [u8; ENCRYPTED_REGION_LEN] {
        let mut out = [0u8; ENCRYPTED_REGION_LEN];
        out[0..TAG_CONFIGS_LEN].copy_from_slice(&self.tag_configs());
        out[TAG_CONFIGS_LEN..].copy_from_slice(&self.application_data());
        out
    }

    pub fn set_encrypted_region(&mut self, region: &[u8; ENCRYPTED_REGION_LEN]) {
        self.set_tag_configs(&region[0..TAG_CONFIGS_LEN]);
        self.set_application_data(&region[TAG_CONFIGS_LEN..]);
    }
}
