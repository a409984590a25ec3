//! Common NTAG21x structure shared by NTAG215 and the Amiibo application
//! layer built on top of it (C3, §3.2–§3.3).

pub mod manufacturer;
pub mod metadata;

pub use manufacturer::ManufacturerData;
pub use metadata::Ntag21xMetadata;
