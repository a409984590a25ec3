//! AES-128 in CTR mode, used both standalone (property tests, §8.1.3) and as
//! the Amiibo encrypted-region cipher (§4.6.2).

use cryptoxide::aes::{ctr, KeySize};

/// XOR `data` in place against the AES-128-CTR key-stream derived from
/// `key` and the 16-byte initial counter block `iv`.
///
/// The counter increments as a big-endian 128-bit integer across 16-byte
/// strides; this is standard CTR mode and is exactly what `cryptoxide::aes::ctr`
/// implements, so no custom counter-increment logic is needed here.
///
/// The operation is its own inverse: calling it twice with the same key and
/// iv restores the original bytes (§8.1 property 3).
pub fn aes128_ctr_apply(key: &[u8; 16], iv: &[u8; 16], data: &mut [u8]) {
    let input = data.to_vec();
    let mut cipher = ctr(KeySize::KeySize128, key, iv);
    cipher.process(&input, data);
}
