//! The unified error type the CLI (and any other caller of the umbrella
//! crate) sees (§7, §10.1).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RfidxError {
    #[error(transparent)]
    Core(#[from] rfidx_core::CoreError),

    #[error(transparent)]
    Crypto(#[from] rfidx_crypto::CryptoError),

    #[error(transparent)]
    Amiibo(#[from] rfidx_amiibo::AmiiboError),

    #[error("unrecognized file format")]
    FileFormatError,

    #[error("unrecognized enum value: {0}")]
    UnknownEnumError(String),

    #[error("{0}")]
    Io(String),

    #[error("Amiibo transforms require --retail-key")]
    MissingRetailKey,

    #[error("generating an Amiibo requires --uuid")]
    MissingUuid,
}

impl RfidxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RfidxError::Core(e) => match e.kind() {
                rfidx_core::error::ErrorKind::BinaryFileSizeError => ErrorKind::BinaryFileSizeError,
                rfidx_core::error::ErrorKind::JsonParseError => ErrorKind::JsonParseError,
                rfidx_core::error::ErrorKind::NfcParseError => ErrorKind::NfcParseError,
                rfidx_core::error::ErrorKind::FileFormatError => ErrorKind::FileFormatError,
                rfidx_core::error::ErrorKind::NumericalOperationFailed => {
                    ErrorKind::NumericalOperationFailed
                }
                rfidx_core::error::ErrorKind::UnknownEnumError => {
                    ErrorKind::UnknownEnumError
                }
                rfidx_core::error::ErrorKind::Ntag21xUidError => ErrorKind::Ntag21xUidError,
                rfidx_core::error::ErrorKind::Ntag21xFixedBytesError => {
                    ErrorKind::Ntag21xFixedBytesError
                }
                rfidx_core::error::ErrorKind::MfcAccessBitsError => {
                    ErrorKind::MfcAccessBitsError
                }
                rfidx_core::error::ErrorKind::DrngError => ErrorKind::DrngError,
            },
            RfidxError::Crypto(_) => ErrorKind::DrngError,
            RfidxError::Amiibo(e) => match e.kind() {
                rfidx_amiibo::error::ErrorKind::AmiiboKeyIoError => ErrorKind::AmiiboKeyIoError,
                rfidx_amiibo::error::ErrorKind::AmiiboHmacValidationError => {
                    ErrorKind::AmiiboHmacValidationError
                }
                rfidx_amiibo::error::ErrorKind::BinaryFileSizeError => {
                    ErrorKind::BinaryFileSizeError
                }
                rfidx_amiibo::error::ErrorKind::JsonParseError => ErrorKind::JsonParseError,
                rfidx_amiibo::error::ErrorKind::NfcParseError => ErrorKind::NfcParseError,
                rfidx_amiibo::error::ErrorKind::FileFormatError => ErrorKind::FileFormatError,
                rfidx_amiibo::error::ErrorKind::NumericalOperationFailed => {
                    ErrorKind::NumericalOperationFailed
                }
                rfidx_amiibo::error::ErrorKind::UnknownEnumError => ErrorKind::UnknownEnumError,
                rfidx_amiibo::error::ErrorKind::Ntag21xUidError => ErrorKind::Ntag21xUidError,
                rfidx_amiibo::error::ErrorKind::Ntag21xFixedBytesError => {
                    ErrorKind::Ntag21xFixedBytesError
                }
                rfidx_amiibo::error::ErrorKind::MfcAccessBitsError => {
                    ErrorKind::MfcAccessBitsError
                }
                rfidx_amiibo::error::ErrorKind::DrngError => ErrorKind::DrngError,
            },
            RfidxError::FileFormatError => ErrorKind::FileFormatError,
            RfidxError::UnknownEnumError(_) => ErrorKind::UnknownEnumError,
            RfidxError::Io(_) => ErrorKind::FileFormatError,
            RfidxError::MissingRetailKey | RfidxError::MissingUuid => {
                ErrorKind::UnknownEnumError
            }
        }
    }
}

/// Fieldless mirror of [`RfidxError`], stable across message-text changes.
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
    AmiiboKeyIoError,
    AmiiboHmacValidationError,
}
