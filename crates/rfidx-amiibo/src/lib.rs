//! Amiibo key derivation, authenticated encryption, signing, and transform
//! composition on top of the NTAG215 memory model (§4.6).

pub mod cipher;
pub mod derive;
pub mod derived_key;
pub mod error;
pub mod format;
pub mod key;
pub mod memory;
pub mod signature;
pub mod transform;

pub use derived_key::DerivedKey;
pub use error::AmiiboError;
pub use key::{DumpedKey, DumpedKeyPair};
pub use memory::AmiiboMemory;
pub use transform::{generate, transform, wipe};
