//! NTAG21x metadata header (§3.2): 56 bytes readable only via NTAG-specific
//! commands, carried alongside a dump rather than inside tag memory.
//!
//! Layout (packed, big-endian-per-field is not applicable — every field is
//! a byte array or single byte):
//! `version[8] tbo0[2] tbo1 memory_max signature[32] counter0[3] tearing0
//!  counter1[3] tearing1 counter2[3] tearing2`

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ntag21xMetadata {
    pub version: [u8; 8],
    pub tbo0: [u8; 2],
    pub tbo1: u8,
    pub memory_max: u8,
    pub signature: [u8; 32],
    pub counter0: [u8; 3],
    pub tearing0: u8,
    pub counter1: [u8; 3],
    pub tearing1: u8,
    pub counter2: [u8; 3],
    pub tearing2: u8,
}

impl Ntag21xMetadata {
    pub const SIZE: usize = 56;

    pub fn zeroed() -> Self {
        Self {
            version: [0; 8],
            tbo0: [0; 2],
            tbo1: 0,
            memory_max: 0,
            signature: [0; 32],
            counter0: [0; 3],
            tearing0: 0,
            counter1: [0; 3],
            tearing1: 0,
            counter2: [0; 3],
            tearing2: 0,
        }
    }

    pub fn from_bytes(b: &[u8]) -> Self {
        debug_assert_eq!(b.len(), Self::SIZE);
        let mut version = [0u8; 8];
        version.copy_from_slice(&b[0..8]);
        let mut signature = [0u8; 32];
        signature.copy_from_slice(&b[12..44]);
        Self {
            version,
            tbo0: [b[8], b[9]],
            tbo1: b[10],
            memory_max: b[11],
            signature,
            counter0: [b[44], b[45], b[46]],
            tearing0: b[47],
            counter1: [b[48], b[49], b[50]],
            tearing1: b[51],
            counter2: [b[52], b[53], b[54]],
            tearing2: b[55],
        }
    }

    pub fn write_to(&self, b: &mut [u8]) {
        debug_assert_eq!(b.len(), Self::SIZE);
        b[0..8].copy_from_slice(&self.version);
        b[8..10].copy_from_slice(&self.tbo0);
        b[10] = self.tbo1;
        b[11] = self.memory_max;
        b[12..44].copy_from_slice(&self.signature);
        b[44..47].copy_from_slice(&self.counter0);
        b[47] = self.tearing0;
        b[48..51].copy_from_slice(&self.counter1);
        b[51] = self.tearing1;
        b[52..55].copy_from_slice(&self.counter2);
        b[55] = self.tearing2;
    }
}

impl Default for Ntag21xMetadata {
    fn default() -> Self {
        Self::zeroed()
    }
}
