//! The transform dispatcher (C7): a single entry point keyed on [`TagKind`]
//! that routes to the NTAG215 / Mifare Classic 1K core transforms or to the
//! Amiibo transform composition.
//!
//! This is the only layer in the workspace that heap-allocates tag
//! structures on the caller's behalf; every component below it operates on
//! borrowed or passed-by-value structures.

use rfidx_amiibo::{AmiiboMemory, DumpedKeyPair};
use rfidx_core::common::{TagKind, TransformCommand};
use rfidx_core::mfc1k::Mfc1kData;
use rfidx_core::ntag21x::Ntag21xMetadata;
use rfidx_core::ntag215::Ntag215Data;

use crate::error::RfidxError;

/// A parsed tag, still tagged with which family it belongs to.
#[derive(Debug, Clone)]
pub enum TagData {
    Ntag215(Ntag215Data, Ntag21xMetadata),
    Mfc1k(Mfc1kData),
    Amiibo(AmiiboMemory, Ntag21xMetadata),
}

impl TagData {
    pub fn kind(&self) -> TagKind {
        match self {
            TagData::Ntag215(..) => TagKind::Ntag215,
            TagData::Mfc1k(_) => TagKind::Mfc1k,
            TagData::Amiibo(..) => TagKind::Amiibo,
        }
    }
}

/// Run `command` against `data` (or allocate fresh storage when `data` is
/// `None`, as `GENERATE` allows), routed by `kind`.
///
/// Amiibo transforms require `keys`; `GENERATE` on an Amiibo additionally
/// requires `uuid`. Both are precondition failures, not tag-level errors,
/// so they're checked before any derivation work starts.
pub fn transform(
    kind: TagKind,
    data: Option<TagData>,
    command: TransformCommand,
    uuid: Option<[u8; 8]>,
    keys: Option<&DumpedKeyPair>,
) -> Result<TagData, RfidxError> {
    tracing::debug!(?kind, ?command, "dispatching transform");
    match kind {
        TagKind::Ntag215 => {
            let (data, header) = match data {
                Some(TagData::Ntag215(d, h)) => (Some(d), Some(h)),
                Some(_) => return Err(RfidxError::FileFormatError),
                None => (None, None),
            };
            let (data, header) = rfidx_core::ntag215::transform(data, header, command)?;
            Ok(TagData::Ntag215(data, header))
        }
        TagKind::Mfc1k => {
            let data = match data {
                Some(TagData::Mfc1k(d)) => Some(d),
                Some(_) => return Err(RfidxError::FileFormatError),
                None => None,
            };
            let data = rfidx_core::mfc1k::transform(data, command)?;
            Ok(TagData::Mfc1k(data))
        }
        TagKind::Amiibo => {
            let keys = keys.ok_or(RfidxError::MissingRetailKey)?;
            let uuid = match command {
                TransformCommand::Generate => uuid.ok_or(RfidxError::MissingUuid)?,
                _ => uuid.unwrap_or([0u8; 8]),
            };
            let (amiibo, header) = match data {
                Some(TagData::Amiibo(a, h)) => (Some(a), Some(h)),
                Some(_) => return Err(RfidxError::FileFormatError),
                None => (None, None),
            };
            let (amiibo, header) = rfidx_amiibo::transform(amiibo, header, command, uuid, keys)?;
            Ok(TagData::Amiibo(amiibo, header))
        }
        TagKind::Unspecified | TagKind::Unknown | TagKind::Error => {
            Err(RfidxError::FileFormatError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntag215_generate_allocates_fresh_data() {
        rfidx_crypto::Rng::init(None);
        let result = transform(TagKind::Ntag215, None, TransformCommand::Generate, None, None).unwrap();
        assert!(matches!(result, TagData::Ntag215(..)));
        rfidx_crypto::Rng::free();
    }

    #[test]
    fn mfc1k_wipe_requires_existing_data() {
        let result = transform(TagKind::Mfc1k, None, TransformCommand::Wipe, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn amiibo_without_keys_is_a_precondition_failure() {
        let result = transform(TagKind::Amiibo, None, TransformCommand::Wipe, None, None);
        assert!(matches!(result, Err(RfidxError::MissingRetailKey)));
    }

    #[test]
    fn amiibo_generate_without_uuid_is_a_precondition_failure() {
        let mut data = [0u8; rfidx_amiibo::key::DUMPED_KEY_PAIR_SIZE];
        data[31] = 14;
        data[111] = 16;
        let keys = DumpedKeyPair::from_bytes(&data).unwrap();
        let result = transform(TagKind::Amiibo, None, TransformCommand::Generate, None, Some(&keys));
        assert!(matches!(result, Err(RfidxError::MissingUuid)));
    }
}
