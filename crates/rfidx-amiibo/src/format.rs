//! The Amiibo format pass (§4.6.4): static bytes that keep an Amiibo valid
//! even after mutation.

use rfidx_core::ntag21x::Ntag21xMetadata;

use crate::memory::AmiiboMemory;

/// Write every fixed/derived byte §4.6.4 names, including the
/// UID-derived `passwd`.
pub fn format_dump(amiibo: &mut AmiiboMemory, header: &mut Ntag21xMetadata) {
    amiibo.set_fixed_a5(0xA5);
    amiibo.0.set_dynamic_lock([0x01, 0x00, 0x0F]);
    amiibo.0.set_reserved(0xBD);

    let mut cfg = amiibo.0.configuration();
    cfg.cfg0 = [0x00, 0x00, 0x00, 0x04];
    cfg.cfg1 = [0x5F, 0x00, 0x00, 0x00];
    cfg.pack = [0x80, 0x80];
    cfg.reserved = [0x00, 0x00];

    let manufacturer = amiibo.0.manufacturer_data();
    cfg.passwd = derive_passwd(&manufacturer.uid0, &manufacturer.uid1);
    amiibo.0.set_configuration(&cfg);

    amiibo.0.set_capability([0xF1, 0x10, 0xFF, 0xEE]);

    let mut manufacturer = manufacturer;
    manufacturer.internal = 0x48;
    manufacturer.lock = [0x0F, 0xE0];
    amiibo.0.set_manufacturer_data(&manufacturer);

    header.version = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03];
    header.memory_max = 134;
}

fn derive_passwd(uid0: &[u8; 3], uid1: &[u8; 4]) -> [u8; 4] {
    [
        uid0[1] ^ uid1[0] ^ 0xAA,
        uid0[2] ^ uid1[1] ^ 0x55,
        uid1[0] ^ uid1[2] ^ 0xAA,
        uid1[1] ^ uid1[3] ^ 0x55,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_fixed_byte() {
        let mut amiibo = AmiiboMemory::zeroed();
        let mut header = Ntag21xMetadata::zeroed();
        let mut manufacturer = amiibo.0.manufacturer_data();
        manufacturer.uid0 = [0x04, 0x11, 0x22];
        manufacturer.uid1 = [0x33, 0x44, 0x55, 0x66];
        amiibo.0.set_manufacturer_data(&manufacturer);

        format_dump(&mut amiibo, &mut header);

        assert_eq!(amiibo.fixed_a5(), 0xA5);
        assert_eq!(amiibo.0.dynamic_lock(), [0x01, 0x00, 0x0F]);
        assert_eq!(amiibo.0.reserved(), 0xBD);
        let cfg = amiibo.0.configuration();
        assert_eq!(cfg.cfg0, [0x00, 0x00, 0x00, 0x04]);
        assert_eq!(cfg.cfg1, [0x5F, 0x00, 0x00, 0x00]);
        assert_eq!(cfg.pack, [0x80, 0x80]);
        assert_eq!(cfg.reserved, [0x00, 0x00]);
        assert_eq!(
            cfg.passwd,
            derive_passwd(&[0x04, 0x11, 0x22], &[0x33, 0x44, 0x55, 0x66])
        );
        assert_eq!(amiibo.0.capability(), [0xF1, 0x10, 0xFF, 0xEE]);
        assert_eq!(amiibo.0.manufacturer_data().internal, 0x48);
        assert_eq!(amiibo.0.manufacturer_data().lock, [0x0F, 0xE0]);
        assert_eq!(header.version, [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03]);
        assert_eq!(header.memory_max, 134);
    }
}
