//! Shared enums used across tag families and at the CLI boundary (§3.1).

/// A transform applied to a parsed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformCommand {
    None,
    Generate,
    RandomizeUid,
    Wipe,
}

/// On-disk representation of a tag dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Binary,
    Json,
    Nfc,
    /// Recognized extension; no codec is implemented yet.
    Eml,
    Unknown,
}

impl FileFormat {
    /// Map a file extension (without the leading dot, case-insensitive) to
    /// a format, per §4.8's extension table.
    pub fn from_extension(ext: &str) -> FileFormat {
        match ext.to_ascii_lowercase().as_str() {
            "bin" => FileFormat::Binary,
            "json" => FileFormat::Json,
            "nfc" => FileFormat::Nfc,
            "eml" => FileFormat::Eml,
            _ => FileFormat::Unknown,
        }
    }
}

/// The tag family a dump belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Ntag215,
    Mfc1k,
    Amiibo,
    /// Detection-boundary sentinels; never produced by a successful parse.
    Unspecified,
    Unknown,
    Error,
}

impl TagKind {
    pub fn from_cli_name(name: &str) -> Option<TagKind> {
        match name {
            "ntag215" => Some(TagKind::Ntag215),
            "mfc1k" => Some(TagKind::Mfc1k),
            "amiibo" => Some(TagKind::Amiibo),
            _ => None,
        }
    }
}
