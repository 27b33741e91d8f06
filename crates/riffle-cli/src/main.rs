//! riffle — structural dump tool for RIFF/WAV container files.
//!
//! Maps a file into memory and prints its chunk hierarchy: the RIFF
//! preamble, the mandatory `fmt ` chunk, every following subchunk, and the
//! tagged text fields inside `LIST`/`INFO` metadata blocks.
//!
//! # Usage
//!
//! ```bash
//! riffle track.wav
//! riffle -v track.wav    # debug-level log on stderr
//! ```

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use memmap2::Mmap;

// ───────────────────────────── CLI definition ─────────────────────────────

/// Top-level CLI entry point for the `riffle` binary.
#[derive(Parser)]
#[command(
    name = "riffle",
    about = "Structural dump of RIFF/WAV container files",
    version,
    long_about = "Prints the chunk hierarchy of a RIFF container: the top-level header,\n\
                  the fmt chunk, every sibling subchunk, and LIST/INFO metadata fields."
)]
struct Cli {
    /// WAV file to inspect.
    file: PathBuf,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,
}

// ────────────────────────────── main ──────────────────────────────

fn main() -> ExitCode {
    // Every failure exits 1, including a bad invocation; clap's default
    // exit code of 2 would break that contract.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
    };

    // Initialize tracing subscriber with env-filter support.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.file)
        .with_context(|| format!("Failed to open {}", cli.file.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", cli.file.display()))?
        .len();
    tracing::debug!(path = %cli.file.display(), bytes = len, "Mapping input file");

    // A zero-length file cannot be mapped; hand the parser an empty view so
    // it fails with the same truncation error as any short file.
    let mapping;
    let data: &[u8] = if len == 0 {
        &[]
    } else {
        mapping = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map {}", cli.file.display()))?;
        &mapping
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    riffle_format::dump(data, &mut out)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
