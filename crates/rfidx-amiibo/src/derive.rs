//! Amiibo key derivation (§4.6.1): builds the HMAC-CTR seed from a dumped
//! master key and a tag's memory, then expands it into a 48-byte
//! [`DerivedKey`].

use rfidx_crypto::hmac_ctr_expand;

use crate::derived_key::DerivedKey;
use crate::key::DumpedKey;
use crate::memory::AmiiboMemory;

/// Derive a per-tag, per-purpose key from `master` (either the data key or
/// the tag key) and `amiibo`'s current memory contents.
///
/// Seed construction, in order (up to 480 bytes but only the bytes
/// actually written participate):
/// 1. `master.type_string` including the terminating NUL.
/// 2. `(16 - master.magic_bytes_size)` leading bytes read starting at the
///    amiibo's `write_counter` field (tag bytes 17..19 of the 540-byte
///    layout): this is a raw copy from the `write_counter` pointer, so for
///    `magic_bytes_size == 14` it reaches one byte past `write_counter`
///    into `unknown_1`.
/// 3. `master.magic_bytes[0..magic_bytes_size]`.
/// 4. The first 8 bytes of the manufacturer block, twice (16 bytes total —
///    not the UID and its repetition; see the design notes on why this
///    asymmetry is intentional).
/// 5. `amiibo.keygen_salt() XOR master.xor_table` (32 bytes).
pub fn derive_key(master: &DumpedKey, amiibo: &AmiiboMemory) -> DerivedKey {
    let mut seed = Vec::with_capacity(480);

    // 1. type_string + terminating NUL.
    let type_len = master
        .type_string
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(master.type_string.len());
    seed.extend_from_slice(&master.type_string[..type_len]);
    seed.push(0);

    // 2. leading bytes starting at the write_counter field (offset 17).
    let lead_len = (16 - master.magic_bytes_size as usize).min(2);
    let tag_bytes = amiibo.as_bytes();
    seed.extend_from_slice(&tag_bytes[17..17 + lead_len]);

    // 3. magic bytes.
    seed.extend_from_slice(&master.magic_bytes[..master.magic_bytes_size as usize]);

    // 4. first 8 bytes of the manufacturer block, twice.
    let manufacturer_head = &tag_bytes[0..8];
    seed.extend_from_slice(manufacturer_head);
    seed.extend_from_slice(manufacturer_head);

    // 5. keygen_salt XOR xor_table.
    let salt = amiibo.keygen_salt();
    let mut xored = [0u8; 32];
    for i in 0..32 {
        xored[i] = salt[i] ^ master.xor_table[i];
    }
    seed.extend_from_slice(&xored);

    let expanded = hmac_ctr_expand(&master.hmac_key, &seed, 48);
    let mut bytes = [0u8; 48];
    bytes.copy_from_slice(&expanded);
    DerivedKey::from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master_key(type_str: &[u8], magic_bytes_size: u8) -> DumpedKey {
        let mut type_string = [0u8; 14];
        type_string[..type_str.len()].copy_from_slice(type_str);
        DumpedKey {
            hmac_key: [0x11; 16],
            type_string,
            rfu: 0,
            magic_bytes_size,
            magic_bytes: [0x22; 16],
            xor_table: [0x33; 32],
        }
    }

    #[test]
    fn deterministic() {
        let key = master_key(b"unfixed infos", 14);
        let amiibo = AmiiboMemory::zeroed();
        let a = derive_key(&key, &amiibo);
        let b = derive_key(&key, &amiibo);
        assert_eq!(a.aes_key, b.aes_key);
        assert_eq!(a.aes_iv, b.aes_iv);
        assert_eq!(a.hmac_key, b.hmac_key);
    }

    #[test]
    fn differs_when_manufacturer_data_differs() {
        let key = master_key(b"locked secret", 16);
        let amiibo_a = AmiiboMemory::zeroed();
        let mut amiibo_b = AmiiboMemory::zeroed();
        amiibo_b.0.as_bytes_mut()[0] = 0x04;

        let a = derive_key(&key, &amiibo_a);
        let b = derive_key(&key, &amiibo_b);
        assert_ne!(a.aes_key, b.aes_key);
    }
}
