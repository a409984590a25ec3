//! HMAC-CTR key-stream expander (§4.2), the building block Amiibo key
//! derivation (`rfidx-amiibo::derive`) uses to stretch a 16-byte HMAC key
//! and a seed into the 48-byte [`DerivedKey`] layout.

use crate::hmac_sha256::HmacSha256;

/// Expand `seed` under `key` into `out_len` bytes.
///
/// For each 32-byte output block, a big-endian 16-bit counter is prepended
/// to `seed` and the result is HMAC-SHA256'd under `key`; the counter then
/// increments. The final block is truncated to fit `out_len`. The HMAC
/// context is created once and `reset` between blocks rather than
/// recreated, but this must (and does) produce byte-identical output to
/// hashing fresh per block.
pub fn hmac_ctr_expand(key: &[u8], seed: &[u8], out_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(out_len);
    let mut ctx = HmacSha256::new(key);
    let mut counter: u16 = 0;

    while out.len() < out_len {
        ctx.update(&counter.to_be_bytes());
        ctx.update(seed);
        let block = ctx.finalize();

        let remaining = out_len - out.len();
        let take = remaining.min(block.len());
        out.extend_from_slice(&block[..take]);

        ctx.reset();
        counter = counter.wrapping_add(1);
    }

    out
}
