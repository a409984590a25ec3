//! Error taxonomy (§8.1 universal property 10): a handful of malformed
//! inputs, each mapped to its documented [`ErrorKind`].

use rfidx::error::ErrorKind;
use rfidx_amiibo::key::DumpedKeyPair;
use rfidx_core::common::{FileFormat, TagKind};

#[test]
fn undersized_ntag215_binary_is_a_binary_file_size_error() {
    let short = vec![0u8; 541];
    let err = rfidx::parse_tag(TagKind::Ntag215, FileFormat::Binary, &short).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BinaryFileSizeError);
}

#[test]
fn oversized_magic_bytes_size_is_an_amiibo_key_io_error() {
    let mut blob = vec![0u8; 160];
    blob[31] = 17;
    blob[30 + 80] = 14;
    let err = DumpedKeyPair::from_bytes(&blob).unwrap_err();
    assert_eq!(err.kind(), rfidx_amiibo::error::ErrorKind::AmiiboKeyIoError);

    let wrapped: rfidx::RfidxError = err.into();
    assert_eq!(wrapped.kind(), ErrorKind::AmiiboKeyIoError);
}

#[test]
fn unknown_extension_is_a_file_format_error() {
    assert_eq!(
        rfidx::format_for_extension("dump.xyz"),
        FileFormat::Unknown
    );
    let err = rfidx::parse_tag(TagKind::Ntag215, FileFormat::Unknown, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileFormatError);
}
