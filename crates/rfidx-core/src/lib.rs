//! Typed tag-memory overlays and multi-format codecs for NTAG21x and Mifare
//! Classic 1K dumps (C1, C3, C4, C5, C9).
//!
//! This crate knows nothing about the Amiibo application layer built on top
//! of NTAG215 (`rfidx-amiibo`) or about tag-kind/file-format dispatch
//! (`rfidx`, the umbrella crate) — it only parses, serializes, and
//! transforms these two concrete tag memories.

pub mod byte_utils;
pub mod common;
pub mod error;
pub mod mfc1k;
pub mod ntag21x;
pub mod ntag215;

pub use common::{FileFormat, TagKind, TransformCommand};
pub use error::CoreError;
