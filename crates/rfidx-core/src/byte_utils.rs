//! Hex codec and whitespace utilities (§4.1, C1).
//!
//! The original's resizable text builder has no counterpart here: `String`
//! and `Vec<u8>` already grow by doubling and are returned by value, which
//! is exactly the "amortized-O(1) append, owned buffer" contract §4.1 asks
//! for — a bespoke growable-buffer type would just reimplement `Vec`.

use crate::error::CoreError;

/// Decode an even-length hex string into exactly `n` bytes.
///
/// Fails with [`CoreError::NumericalOperationFailed`] if `hex` contains
/// non-hex characters, or with [`CoreError::BinaryFileSizeError`] if it
/// decodes to a length other than `n`.
pub fn hex_to_bytes(hex: &str, n: usize) -> Result<Vec<u8>, CoreError> {
    let trimmed = strip_whitespace(hex);
    let decoded = hex::decode(&trimmed).map_err(|_| CoreError::NumericalOperationFailed)?;
    if decoded.len() != n {
        return Err(CoreError::BinaryFileSizeError {
            expected: n,
            actual: decoded.len(),
        });
    }
    Ok(decoded)
}

/// Decode an even-length hex string into exactly `N` bytes.
pub fn hex_to_array<const N: usize>(hex: &str) -> Result<[u8; N], CoreError> {
    let bytes = hex_to_bytes(hex, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Render `bytes` as `2 * bytes.len()` uppercase hex ASCII characters.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{b:02X}"));
    }
    s
}

/// Return an owned copy of `s` with every whitespace character removed.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
