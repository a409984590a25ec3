//! Mifare Classic 1K end-to-end scenarios (S6) and the general codec
//! round-trip property (§8.1.1) exercised against a synthesized dump.

use rfidx_core::mfc1k::{self, Mfc1kData, SectorTrailer};

#[test]
fn s6_access_bit_packing_round_trips_through_a_trailer() {
    let mut trailer = SectorTrailer {
        key_a: [0xFF; 6],
        access_bits: [0x00, 0x00, 0x00],
        user_data: 0x00,
        key_b: [0xFF; 6],
    };

    trailer.set_access_bits_for_block(2, (1, 0, 1));
    assert_eq!(trailer.access_bits_for_block(2), (1, 0, 1));

    // The three complement bits sit at bit position (4 + block) in ab[0],
    // block in ab[0]'s high nibble's complement slots... concretely:
    // ab[0] carries both the c1 complement and the c2 complement nibbles,
    // so we check validate_access_bits accepts what we just wrote.
    assert!(trailer.validate_access_bits().is_ok());
}

#[test]
fn binary_codec_round_trips_a_generated_dump() {
    rfidx_crypto::Rng::init(None);
    let mut data = Mfc1kData::zeroed();
    mfc1k::generate(&mut data).unwrap();

    let bytes = mfc1k::serialize_binary(&data);
    assert_eq!(bytes.len(), mfc1k::SIZE);

    let (parsed, _header) = mfc1k::parse_binary(&bytes).unwrap();
    assert_eq!(parsed, data);
    rfidx_crypto::Rng::free();
}

#[test]
fn json_codec_round_trips_a_generated_dump() {
    rfidx_crypto::Rng::init(None);
    let mut data = Mfc1kData::zeroed();
    mfc1k::generate(&mut data).unwrap();
    let header = mfc1k::Mfc1kMetadata::synthesize(&data);

    let json = mfc1k::serialize_json(&data, &header);
    let (parsed, _) = mfc1k::parse_json(&json).unwrap();
    assert_eq!(parsed, data);
    rfidx_crypto::Rng::free();
}
