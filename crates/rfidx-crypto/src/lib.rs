//! Cryptographic primitives backing the Amiibo application core.
//!
//! This crate carries no notion of tag memory layout — it only knows about
//! bytes, keys, and three primitive operations: AES-128-CTR, HMAC-SHA256,
//! and the HMAC-CTR key-stream expander built on top of it. Tag-shaped
//! structures live in `rfidx-core` and `rfidx-amiibo`.

pub mod aes_ctr;
pub mod error;
pub mod expand;
pub mod hmac_sha256;
pub mod memsec;
pub mod rng;

pub use aes_ctr::aes128_ctr_apply;
pub use error::CryptoError;
pub use expand::hmac_ctr_expand;
pub use hmac_sha256::HmacSha256;
pub use rng::Rng;
