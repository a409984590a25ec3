//! Command-line argument surface (§6.4).
//!
//! A flat [`clap::Parser`], not subcommands: the CLI runs one pipeline
//! (read, transform, re-encode) with optional flags, rather than
//! branching into a subcommand per operation.

use clap::{Parser, ValueEnum};
use rfidx_core::common::{FileFormat, TagKind, TransformCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputType {
    Ntag215,
    Mfc1k,
    Amiibo,
}

impl From<InputType> for TagKind {
    fn from(value: InputType) -> Self {
        match value {
            InputType::Ntag215 => TagKind::Ntag215,
            InputType::Mfc1k => TagKind::Mfc1k,
            InputType::Amiibo => TagKind::Amiibo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Binary,
    Json,
    Nfc,
    Eml,
}

impl From<OutputFormatArg> for FileFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Binary => FileFormat::Binary,
            OutputFormatArg::Json => FileFormat::Json,
            OutputFormatArg::Nfc => FileFormat::Nfc,
            OutputFormatArg::Eml => FileFormat::Eml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TransformArg {
    Generate,
    RandomizeUid,
    Wipe,
}

impl From<TransformArg> for TransformCommand {
    fn from(value: TransformArg) -> Self {
        match value {
            TransformArg::Generate => TransformCommand::Generate,
            TransformArg::RandomizeUid => TransformCommand::RandomizeUid,
            TransformArg::Wipe => TransformCommand::Wipe,
        }
    }
}

/// Parse, transform, and re-encode an RFID/NFC tag dump.
#[derive(Debug, Parser)]
#[clap(name = "rfidx")]
#[clap(bin_name = "rfidx")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(about = "Parse, transform, and re-encode NTAG215 / Mifare Classic 1K / Amiibo tag dumps")]
pub struct Args {
    /// Path to the input dump. If omitted, a blank tag is allocated and
    /// both --input-type and --transform become required.
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to write the result to. If omitted, the result is printed to
    /// stdout.
    #[arg(short = 'o', long, value_name = "PATH", requires = "output_format")]
    pub output: Option<String>,

    /// Tag family of the input (and, when generating, of the output).
    #[arg(short = 'I', long, value_enum)]
    pub input_type: Option<InputType>,

    /// Encoding to render the result in.
    #[arg(short = 'F', long, value_enum)]
    pub output_format: Option<OutputFormatArg>,

    /// Transform to apply before re-encoding.
    #[arg(short = 't', long, value_enum)]
    pub transform: Option<TransformArg>,

    /// 8-byte UUID as 16 hex characters, required by `generate` on an
    /// Amiibo.
    #[arg(long, value_name = "HEX16")]
    pub uuid: Option<String>,

    /// Path to a 160-byte Amiibo retail-key file, required for any Amiibo
    /// transform.
    #[arg(long, value_name = "PATH")]
    pub retail_key: Option<String>,

    /// Raise the log level; repeatable (info, debug, trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
