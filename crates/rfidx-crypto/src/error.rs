use thiserror::Error;

/// Crypto-layer failures.
///
/// Only `DRNG_ERROR` originates here (§7); tag-level and format-level
/// errors live in `rfidx-core`/`rfidx-amiibo`.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("random number generator is not initialized")]
    RngUninitialized,

    #[error("random number generator entropy source failed")]
    RngEntropyFailure,
}

impl CryptoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::RngUninitialized | CryptoError::RngEntropyFailure => ErrorKind::DrngError,
        }
    }
}

/// Fieldless mirror of [`CryptoError`] for tests and exit-code mapping that
/// want to assert on *kind* rather than message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DrngError,
}
