//! # riffle-format
//!
//! Bounds-checked structural parser for RIFF container files, with WAV as
//! the concrete instance. Walks the chunk hierarchy of an in-memory byte
//! view and renders it as a bracketed text dump; it never decodes audio.
//!
//! ## Format Overview
//!
//! A WAV file consists of:
//! - **RIFF preamble** (12 bytes): `RIFF` magic, total chunk size, `WAVE` tag
//! - **`fmt ` chunk** (24 bytes): codec code, channel count, rates, sample width
//! - **Subchunks**: `data`, `fact`, `LIST`/`INFO` metadata, and friends, each
//!   a `{4-byte ID, u32 size, payload}` record
//!
//! Every read passes through one bounds-checked [`Cursor`], so a lying size
//! field surfaces as an error, never as an out-of-range read.
//!
//! ## Example
//! ```rust
//! let mut file = Vec::new();
//! file.extend_from_slice(b"RIFF");
//! file.extend_from_slice(&36u32.to_le_bytes());
//! file.extend_from_slice(b"WAVE");
//! file.extend_from_slice(b"fmt ");
//! file.extend_from_slice(&16u32.to_le_bytes());
//! file.extend_from_slice(&1u16.to_le_bytes());
//! file.extend_from_slice(&1u16.to_le_bytes());
//! file.extend_from_slice(&8000u32.to_le_bytes());
//! file.extend_from_slice(&16000u32.to_le_bytes());
//! file.extend_from_slice(&2u16.to_le_bytes());
//! file.extend_from_slice(&16u16.to_le_bytes());
//!
//! let mut out = Vec::new();
//! riffle_format::dump(&file, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("AudioFormat: 'PCM'"));
//! ```

use std::io::Write;

pub mod chunk;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod header;
pub mod info;
pub mod render;

pub use chunk::*;
pub use cursor::Cursor;
pub use error::{Result, RiffError};
pub use header::*;
pub use info::*;

/// Display number of the first chunk the walker sees: `fmt ` is subchunk 1,
/// so walking starts at 2.
pub const FIRST_WALKER_INDEX: u32 = 2;

/// Parse `data` as a complete RIFF/WAV file and write the structural dump
/// to `out`.
///
/// The dump is written record by record as parsing proceeds; on failure the
/// records already validated remain in `out` and the failing one leaves no
/// partial line.
///
/// # Errors
///
/// Returns [`RiffError`] describing the first structural violation, or an
/// I/O error from `out`. No error is ever recovered from; the first one
/// ends the parse.
pub fn dump<W: Write>(data: &[u8], out: &mut W) -> Result<()> {
    tracing::info!(bytes = data.len(), "Parsing RIFF structure");

    let mut cursor = Cursor::new(data);
    let riff = header::read_riff_header(&mut cursor, out)?;
    let fmt = header::read_format_chunk(&mut cursor, out)?;
    let walked = chunk::walk_subchunks(&mut cursor, FIRST_WALKER_INDEX, out)?;

    tracing::info!(
        chunk_size = riff.chunk_size,
        audio_format = fmt.audio_format,
        subchunks = walked + 1,
        "Dump complete"
    );
    Ok(())
}
