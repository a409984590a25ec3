//! The 48-byte derived key triple (§3.9): immutable after derivation,
//! scrubbed on drop.

use rfidx_crypto::memsec::Scrubbed;

/// `aes_key | aes_iv | hmac_key`, derived per-tag and per-purpose. Never
/// persisted; constructed during a transform and dropped before it
/// returns.
pub struct DerivedKey {
    pub aes_key: [u8; 16],
    pub aes_iv: [u8; 16],
    pub hmac_key: [u8; 16],
}

impl DerivedKey {
    pub fn from_bytes(b: &[u8; 48]) -> Self {
        Self {
            aes_key: b[0..16].try_into().unwrap(),
            aes_iv: b[16..32].try_into().unwrap(),
            hmac_key: b[32..48].try_into().unwrap(),
        }
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.aes_key.scrub();
        self.aes_iv.scrub();
        self.hmac_key.scrub();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_48_bytes_into_three_16_byte_fields() {
        let mut bytes = [0u8; 48];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let key = DerivedKey::from_bytes(&bytes);
        assert_eq!(&key.aes_key[..], &bytes[0..16]);
        assert_eq!(&key.aes_iv[..], &bytes[16..32]);
        assert_eq!(&key.hmac_key[..], &bytes[32..48]);
    }
}
