//! HMAC-SHA256 with an explicit reset/update/finalize lifecycle (§4.2).
//!
//! The reusable-context shape matters: [`crate::expand::hmac_ctr_expand`]
//! sets the key once and resets between output blocks rather than
//! constructing a fresh HMAC per block, and the two must be observably
//! identical.

use cryptoxide::hmac::Hmac;
use cryptoxide::mac::Mac;
use cryptoxide::sha2::Sha256;

/// A reusable HMAC-SHA256 context.
pub struct HmacSha256 {
    mac: Hmac<Sha256>,
}

impl HmacSha256 {
    pub fn new(key: &[u8]) -> Self {
        Self {
            mac: Hmac::new(Sha256::new(), key),
        }
    }

    /// Feed additional bytes into the running MAC.
    pub fn update(&mut self, data: &[u8]) {
        self.mac.input(data);
    }

    /// Clear accumulated input while keeping the key, ready for a new message.
    pub fn reset(&mut self) {
        self.mac.reset();
    }

    /// Consume the accumulated input and produce the 32-byte digest. Does
    /// not clear the key; callers that want to reuse the context for a new
    /// message must call [`Self::reset`] first.
    pub fn finalize(&mut self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.mac.raw_result(&mut out);
        out
    }

    /// One-shot convenience: HMAC-SHA256(key, data).
    pub fn mac(key: &[u8], data: &[u8]) -> [u8; 32] {
        let mut ctx = Self::new(key);
        ctx.update(data);
        ctx.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let key = b"a key";
        let data = b"some message";
        assert_eq!(HmacSha256::mac(key, data), HmacSha256::mac(key, data));
    }

    #[test]
    fn reset_matches_fresh_context() {
        let key = b"reuse-me";

        let mut reused = HmacSha256::new(key);
        reused.update(b"first message");
        let _ = reused.finalize();
        reused.reset();
        reused.update(b"second message");
        let via_reset = reused.finalize();

        let fresh = HmacSha256::mac(key, b"second message");
        assert_eq!(via_reset, fresh);
    }
}
