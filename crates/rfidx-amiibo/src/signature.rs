//! Amiibo tag/data HMAC-SHA256 signatures (§4.6.3).
//!
//! Both HMACs are computed over a 480-byte signing buffer assembled from
//! disjoint-but-overlapping slices of the 540-byte tag layout. Signatures
//! are always computed on *decrypted* data — enforcing that precondition
//! is the caller's responsibility (the transform state machine in
//! `transform.rs` upholds it).

use rfidx_crypto::HmacSha256;

use crate::derived_key::DerivedKey;
use crate::error::AmiiboError;
use crate::memory::AmiiboMemory;

const BUFFER_LEN: usize = 480;
const TAG_HASH_RANGE: std::ops::Range<usize> = 396..428;
const TAG_HMAC_INPUT_RANGE: std::ops::Range<usize> = 428..480;
const DATA_HMAC_INPUT_START: usize = 1;

fn build_buffer(amiibo: &AmiiboMemory) -> [u8; BUFFER_LEN] {
    let mut buf = [0u8; BUFFER_LEN];
    let tag_bytes = amiibo.as_bytes();

    buf[0..36].copy_from_slice(&tag_bytes[16..52]);
    buf[36..396].copy_from_slice(&amiibo.application_data());
    // buf[396..428) left zero; filled with the tag hash below.
    buf[428..436].copy_from_slice(&tag_bytes[0..8]);
    buf[436..480].copy_from_slice(&tag_bytes[84..128]);

    buf
}

/// Recompute both HMACs, returning `(tag_hash, data_hash)`.
fn compute(tag_key: &DerivedKey, data_key: &DerivedKey, amiibo: &AmiiboMemory) -> ([u8; 32], [u8; 32]) {
    let mut buf = build_buffer(amiibo);

    let tag_hash = HmacSha256::mac(&tag_key.hmac_key, &buf[TAG_HMAC_INPUT_RANGE]);
    buf[TAG_HASH_RANGE].copy_from_slice(&tag_hash);

    let data_hash = HmacSha256::mac(&data_key.hmac_key, &buf[DATA_HMAC_INPUT_START..]);

    (tag_hash, data_hash)
}

/// Recompute both HMACs and write them into `amiibo.tag_hash` /
/// `amiibo.data_hash`.
pub fn sign(tag_key: &DerivedKey, data_key: &DerivedKey, amiibo: &mut AmiiboMemory) {
    let (tag_hash, data_hash) = compute(tag_key, data_key, amiibo);
    amiibo.set_tag_hash(&tag_hash);
    amiibo.set_data_hash(&data_hash);
}

/// Recompute both HMACs and compare against the stored fields.
pub fn validate(
    tag_key: &DerivedKey,
    data_key: &DerivedKey,
    amiibo: &AmiiboMemory,
) -> Result<(), AmiiboError> {
    let (tag_hash, data_hash) = compute(tag_key, data_key, amiibo);
    if tag_hash != amiibo.tag_hash() || data_hash != amiibo.data_hash() {
        return Err(AmiiboError::HmacValidationError);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_validate_succeeds() {
        let tag_key = DerivedKey::from_bytes(&[0x11u8; 48]);
        let data_key = DerivedKey::from_bytes(&[0x22u8; 48]);
        let mut amiibo = AmiiboMemory::zeroed();
        amiibo.set_model_info(&[0xAB; 12]);

        sign(&tag_key, &data_key, &mut amiibo);
        assert!(validate(&tag_key, &data_key, &amiibo).is_ok());
    }

    #[test]
    fn tampered_application_data_fails_validation() {
        let tag_key = DerivedKey::from_bytes(&[0x11u8; 48]);
        let data_key = DerivedKey::from_bytes(&[0x22u8; 48]);
        let mut amiibo = AmiiboMemory::zeroed();

        sign(&tag_key, &data_key, &mut amiibo);
        let mut tampered = amiibo.application_data();
        tampered[0] ^= 0xFF;
        amiibo.set_application_data(&tampered);

        assert!(matches!(
            validate(&tag_key, &data_key, &amiibo),
            Err(AmiiboError::HmacValidationError)
        ));
    }
}
