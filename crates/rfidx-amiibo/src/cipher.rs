//! AES-128-CTR over the Amiibo encrypted region (§4.6.2).

use rfidx_crypto::aes128_ctr_apply;

use crate::derived_key::DerivedKey;
use crate::memory::{AmiiboMemory, ENCRYPTED_REGION_LEN};

/// Apply AES-128-CTR in place to `tag_configs || application_data` using
/// `key.aes_key`/`key.aes_iv`. Its own inverse: calling twice with the same
/// key restores the original bytes.
pub fn apply(key: &DerivedKey, amiibo: &mut AmiiboMemory) {
    let mut region = amiibo.encrypted_region();
    aes128_ctr_apply(&key.aes_key, &key.aes_iv, &mut region);
    amiibo.set_encrypted_region(&region);
}
