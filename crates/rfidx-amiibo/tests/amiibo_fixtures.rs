//! Amiibo end-to-end scenarios (S3, S5) built from the documented retail
//! key field values, since the real `key_retail.bin` asset isn't checked
//! into this repo.

use rfidx_amiibo::key::{DumpedKey, DumpedKeyPair, DUMPED_KEY_SIZE};
use rfidx_amiibo::{derive, memory::AmiiboMemory, signature, transform};

fn hex16(s: &str) -> [u8; 16] {
    let bytes = hex::decode(s).unwrap();
    bytes.try_into().unwrap()
}

fn dumped_key(hmac_key_hex: &str, type_str: &[u8], magic_bytes_size: u8) -> DumpedKey {
    let mut type_string = [0u8; 14];
    type_string[..type_str.len()].copy_from_slice(type_str);
    DumpedKey {
        hmac_key: hex16(hmac_key_hex),
        type_string,
        rfu: 0,
        magic_bytes_size,
        magic_bytes: [0u8; 16],
        xor_table: [0u8; 32],
    }
}

fn retail_key_pair() -> DumpedKeyPair {
    DumpedKeyPair {
        data: dumped_key("1D164B375B72A55728B91D64B6A3C205", b"unfixed infos", 14),
        tag: dumped_key("7F752D2873A20017FEF85C0575904B6D", b"locked secret", 16),
    }
}

#[test]
fn s3_retail_key_fields_match_the_documented_reference() {
    let keys = retail_key_pair();
    assert_eq!(keys.data.type_str(), "unfixed infos");
    assert_eq!(keys.data.magic_bytes_size, 14);
    assert_eq!(keys.tag.type_str(), "locked secret");
    assert_eq!(keys.tag.magic_bytes_size, 16);

    // The pair also parses correctly from its 160-byte on-disk form.
    let mut blob = Vec::with_capacity(DUMPED_KEY_SIZE * 2);
    blob.extend_from_slice(&keys.data.to_bytes());
    blob.extend_from_slice(&keys.tag.to_bytes());
    let parsed = DumpedKeyPair::from_bytes(&blob).unwrap();
    assert_eq!(parsed.data.hmac_key, keys.data.hmac_key);
    assert_eq!(parsed.tag.hmac_key, keys.tag.hmac_key);
}

#[test]
fn derive_sign_validate_round_trips_with_the_reference_keys() {
    let keys = retail_key_pair();
    let amiibo = AmiiboMemory::zeroed();

    let tag_key = derive::derive_key(&keys.tag, &amiibo);
    let data_key = derive::derive_key(&keys.data, &amiibo);

    let mut amiibo = amiibo;
    signature::sign(&tag_key, &data_key, &mut amiibo);
    assert!(signature::validate(&tag_key, &data_key, &amiibo).is_ok());
}

#[test]
fn s5_generate_with_the_reference_keys_and_uuid() {
    rfidx_crypto::Rng::init(None);
    let keys = retail_key_pair();
    let uuid = hex::decode("09D0030102BB0E02").unwrap();
    let uuid: [u8; 8] = uuid.try_into().unwrap();

    let (mut amiibo, header) =
        transform::transform(None, None, rfidx_core::common::TransformCommand::Generate, uuid, &keys)
            .unwrap();

    assert_eq!(&amiibo.model_info()[0..8], &uuid);
    assert_eq!(header.memory_max, 134);

    let tag_key = derive::derive_key(&keys.tag, &amiibo);
    let data_key = derive::derive_key(&keys.data, &amiibo);
    rfidx_amiibo::cipher::apply(&tag_key, &mut amiibo);
    assert!(signature::validate(&tag_key, &data_key, &amiibo).is_ok());
    rfidx_crypto::Rng::free();
}
