//! The CLI's actual pipeline, factored out of `main` so integration tests
//! can drive it directly against in-memory buffers instead of spawning a
//! process.

use std::io::Write;
use std::process::ExitCode;

use rfidx::error::RfidxError;
use rfidx_amiibo::DumpedKeyPair;
use rfidx_core::common::{FileFormat, TransformCommand};

use crate::cli::Args;

fn parse_uuid(hex_str: &str) -> Result<[u8; 8], RfidxError> {
    let bytes = hex::decode(hex_str).map_err(|_| RfidxError::FileFormatError)?;
    bytes
        .try_into()
        .map_err(|_| RfidxError::FileFormatError)
}

fn load_retail_key(path: &str) -> Result<DumpedKeyPair, RfidxError> {
    let bytes = std::fs::read(path).map_err(|e| RfidxError::Io(e.to_string()))?;
    Ok(DumpedKeyPair::from_bytes(&bytes)?)
}

fn pipeline(args: &Args) -> Result<Option<String>, RfidxError> {
    if args.input.is_none() && (args.input_type.is_none() || args.transform.is_none()) {
        return Err(RfidxError::UnknownEnumError(
            "without --input, both --input-type and --transform are required".into(),
        ));
    }
    let kind = args
        .input_type
        .ok_or_else(|| {
            RfidxError::UnknownEnumError("--input-type is required to parse --input".into())
        })?
        .into();

    let data = match &args.input {
        Some(path) => {
            let format = rfidx::format_for_extension(path);
            tracing::debug!(?path, ?format, "detected input format");
            Some(rfidx::read_tag(path, kind, format)?)
        }
        None => None,
    };

    let uuid = args.uuid.as_deref().map(parse_uuid).transpose()?;
    let keys = args
        .retail_key
        .as_deref()
        .map(load_retail_key)
        .transpose()?;

    let command = args.transform.map(Into::into).unwrap_or(TransformCommand::None);
    tracing::debug!(?kind, ?command, "running transform");
    let result = rfidx::transform(kind, data, command, uuid, keys.as_ref())?;

    let output_format: FileFormat = match args.output_format {
        Some(f) => f.into(),
        None => return Ok(None),
    };

    rfidx::write_tag(&result, output_format, args.output.as_deref())
}

/// Run the pipeline, writing the rendered result (if any) to `out` and any
/// error message to `err`. Mirrors `rfidx_main(argc, argv, output_stream,
/// error_stream)` from the original entry point.
pub fn run(args: Args, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match pipeline(&args) {
        Ok(Some(rendered)) => {
            let _ = writeln!(out, "{rendered}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{e}");
            let _ = writeln!(err, "{e}");
            ExitCode::FAILURE
        }
    }
}
