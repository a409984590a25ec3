//! Error taxonomy for the tag-memory and codec layer (§7, §10.1).
//!
//! Every fallible operation in this crate returns a [`CoreError`] variant;
//! callers recover the stable §7 identifier via [`CoreError::kind`] without
//! matching on message text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("binary dump size {actual} does not match any accepted size (expected {expected})")]
    BinaryFileSizeError { expected: usize, actual: usize },

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("NFC parse error: {0}")]
    NfcParseError(String),

    #[error("unrecognized file format")]
    FileFormatError,

    #[error("numerical operation failed")]
    NumericalOperationFailed,

    #[error("unrecognized enum value")]
    UnknownEnumError,

    #[error("NTAG21x UID/BCC validation failed")]
    Ntag21xUidError,

    #[error("NTAG21x manufacturer fixed byte ({internal:#04x}) differs from the expected 0x48")]
    Ntag21xFixedBytesError { internal: u8 },

    #[error("Mifare Classic access bits are not self-consistent")]
    MfcAccessBitsError,

    #[error("random number generator is not initialized")]
    DrngError,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::BinaryFileSizeError { .. } => ErrorKind::BinaryFileSizeError,
            CoreError::JsonParseError(_) => ErrorKind::JsonParseError,
            CoreError::NfcParseError(_) => ErrorKind::NfcParseError,
            CoreError::FileFormatError => ErrorKind::FileFormatError,
            CoreError::NumericalOperationFailed => ErrorKind::NumericalOperationFailed,
            CoreError::UnknownEnumError => ErrorKind::UnknownEnumError,
            CoreError::Ntag21xUidError => ErrorKind::Ntag21xUidError,
            CoreError::Ntag21xFixedBytesError { .. } => ErrorKind::Ntag21xFixedBytesError,
            CoreError::MfcAccessBitsError => ErrorKind::MfcAccessBitsError,
            CoreError::DrngError => ErrorKind::DrngError,
        }
    }
}

impl From<rfidx_crypto::CryptoError> for CoreError {
    fn from(_: rfidx_crypto::CryptoError) -> Self {
        CoreError::DrngError
    }
}

/// Fieldless mirror of [`CoreError`], stable across message-text changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BinaryFileSizeError,
    JsonParseError,
    NfcParseError,
    FileFormatError,
    NumericalOperationFailed,
    UnknownEnumError,
    Ntag21xUidError,
    Ntag21xFixedBytesError,
    MfcAccessBitsError,
    DrngError,
}
