//! Amiibo-specific error taxonomy (§7, §10.1).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmiiboError {
    #[error("retail key file is missing or malformed: {0}")]
    KeyIoError(String),

    #[error("tag or data HMAC validation failed")]
    HmacValidationError,

    #[error(transparent)]
    Core(#[from] rfidx_core::CoreError),

    #[error(transparent)]
    Crypto(#[from] rfidx_crypto::CryptoError),
}

impl AmiiboError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AmiiboError::KeyIoError(_) => ErrorKind::AmiiboKeyIoError,
            AmiiboError::HmacValidationError => ErrorKind::AmiiboHmacValidationError,
            AmiiboError::Core(e) => match e.kind() {
                rfidx_core::error::ErrorKind::BinaryFileSizeError => ErrorKind::BinaryFileSizeError,
                rfidx_core::error::ErrorKind::JsonParseError => ErrorKind::JsonParseError,
                rfidx_core::error::ErrorKind::NfcParseError => ErrorKind::NfcParseError,
                rfidx_core::error::ErrorKind::FileFormatError => ErrorKind::FileFormatError,
                rfidx_core::error::ErrorKind::NumericalOperationFailed => {
                    ErrorKind::NumericalOperationFailed
                }
                rfidx_core::error::ErrorKind::UnknownEnumError => ErrorKind::UnknownEnumError,
                rfidx_core::error::ErrorKind::Ntag21xUidError => ErrorKind::Ntag21xUidError,
                rfidx_core::error::ErrorKind::Ntag21xFixedBytesError => {
                    ErrorKind::Ntag21xFixedBytesError
                }
                rfidx_core::error::ErrorKind::MfcAccessBitsError => ErrorKind::MfcAccessBitsError,
                rfidx_core::error::ErrorKind::DrngError => ErrorKind::DrngError,
            },
            AmiiboError::Crypto(_) => ErrorKind::DrngError,
        }
    }
}

/// Fieldless mirror of [`AmiiboError`], also carrying the full
/// [`rfidx_core::error::ErrorKind`] taxonomy through unchanged: this crate's
/// errors often just wrap a `CoreError`, and collapsing those into a single
/// catch-all would make that variant's identity lie about what failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AmiiboKeyIoError,
    AmiiboHmacValidationError,
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
