//! Tag-kind dispatch, file-format negotiation, and the unified error type
//! sitting on top of `rfidx-core`, `rfidx-crypto`, and `rfidx-amiibo`.
//!
//! This is the only crate in the workspace that heap-allocates tag
//! structures and touches the filesystem; `rfidx-core`/`rfidx-amiibo`
//! operate purely on borrowed or passed-by-value in-memory structures.

pub mod dispatch;
pub mod error;
pub mod format;

pub use dispatch::{transform, TagData};
pub use error::RfidxError;
pub use format::{format_for_extension, parse_tag, read_tag, write_tag};
