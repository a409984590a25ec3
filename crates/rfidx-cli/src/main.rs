//! `rfidx`: a command-line front end for parsing, transforming, and
//! re-encoding NTAG215 / Mifare Classic 1K / Amiibo tag dumps.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod run;

use cli::Args;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    // `generate`/`randomize-uid` need entropy; init is idempotent and a
    // no-op for transforms that never draw from it.
    rfidx_crypto::Rng::init(None);

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    run::run(args, &mut out, &mut err)
}
