//! The two fixed records at the head of every WAV file: the 12-byte RIFF
//! preamble and the 16-byte `fmt ` payload.

use std::io::Write;

use crate::codec;
use crate::cursor::Cursor;
use crate::error::{Result, RiffError};
use crate::render;

/// Magic bytes opening every little-endian RIFF file.
pub const RIFF_MAGIC: [u8; 4] = *b"RIFF";

/// Magic bytes of the big-endian RIFF variant. Recognised only so it can be
/// refused cleanly instead of misparsed with byte-swapped sizes.
pub const RIFX_MAGIC: [u8; 4] = *b"RIFX";

/// Chunk ID of the mandatory format chunk.
pub const FMT_ID: [u8; 4] = *b"fmt ";

/// The only `fmt ` payload size accepted: the classic PCM layout. Extended
/// layouts (18 or 40 bytes) are rejected rather than half-read.
pub const FMT_PAYLOAD_SIZE: u32 = 16;

/// The parsed RIFF preamble.
///
/// Layout (12 bytes, little-endian):
/// - `[0..4]`  magic: `RIFF`
/// - `[4..8]`  chunk_size: u32 (by convention, file size minus 8)
/// - `[8..12]` format: 4 raw bytes, `WAVE` for audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiffHeader {
    /// Self-reported size of everything after the first 8 bytes.
    pub chunk_size: u32,
    /// Container format tag, reported as found.
    pub format: [u8; 4],
}

/// The parsed `fmt ` chunk payload.
///
/// Layout (16 bytes, little-endian):
/// - `[0..2]`   audio_format: u16 codec code (see [`codec`])
/// - `[2..4]`   num_channels: u16
/// - `[4..8]`   sample_rate: u32 in Hz
/// - `[8..12]`  byte_rate: u32
/// - `[12..14]` block_align: u16
/// - `[14..16]` bits_per_sample: u16
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatChunk {
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

/// An underrun inside these fixed records means the file itself is cut
/// short, not that a declared size lied.
fn truncated(err: RiffError) -> RiffError {
    match err {
        RiffError::Underrun { needed, remaining } => {
            RiffError::TruncatedHeader { needed, remaining }
        }
        other => other,
    }
}

/// Read and validate the RIFF preamble, then write its dump line to `out`.
///
/// The declared chunk size is checked against the bytes physically present
/// in the whole view. By convention the field holds the file size minus 8,
/// so a value above the view length proves the file is cut short or the
/// field corrupt.
///
/// Nothing is written to `out` until every check has passed.
pub fn read_riff_header<W: Write>(cursor: &mut Cursor<'_>, out: &mut W) -> Result<RiffHeader> {
    let available = cursor.remaining();

    let magic = cursor.read_tag().map_err(truncated)?;
    if magic == RIFX_MAGIC {
        return Err(RiffError::RifxUnsupported);
    }
    if magic != RIFF_MAGIC {
        return Err(RiffError::BadMagic {
            found: render::escape_bytes(&magic),
        });
    }

    let chunk_size = cursor.read_u32_le().map_err(truncated)?;
    if chunk_size as usize > available {
        return Err(RiffError::SizeOverflow {
            declared: chunk_size,
            available,
        });
    }

    let format = cursor.read_tag().map_err(truncated)?;
    tracing::debug!(
        chunk_size,
        format = %render::escape_bytes(&format),
        "Parsed RIFF preamble"
    );

    write!(out, "RIFF[ChunkSize: {chunk_size}, Format: '")?;
    out.write_all(&format)?;
    writeln!(out, "']")?;

    Ok(RiffHeader { chunk_size, format })
}

/// Read and validate the mandatory `fmt ` chunk, then write its dump line
/// (subchunk number 1) to `out`.
///
/// The six fixed fields are read in wire order after the declared payload
/// size is confirmed to be exactly [`FMT_PAYLOAD_SIZE`]. The codec code is
/// mapped to a display name; unknown codes render as their decimal value.
pub fn read_format_chunk<W: Write>(cursor: &mut Cursor<'_>, out: &mut W) -> Result<FormatChunk> {
    let id = cursor.read_tag().map_err(truncated)?;
    if id != FMT_ID {
        return Err(RiffError::MissingFmtChunk {
            found: render::escape_bytes(&id),
        });
    }

    let declared = cursor.read_u32_le().map_err(truncated)?;
    if declared != FMT_PAYLOAD_SIZE {
        return Err(RiffError::UnexpectedFmtSize {
            declared,
            expected: FMT_PAYLOAD_SIZE,
        });
    }

    let fmt = FormatChunk {
        audio_format: cursor.read_u16_le().map_err(truncated)?,
        num_channels: cursor.read_u16_le().map_err(truncated)?,
        sample_rate: cursor.read_u32_le().map_err(truncated)?,
        byte_rate: cursor.read_u32_le().map_err(truncated)?,
        block_align: cursor.read_u16_le().map_err(truncated)?,
        bits_per_sample: cursor.read_u16_le().map_err(truncated)?,
    };
    tracing::debug!(
        audio_format = fmt.audio_format,
        num_channels = fmt.num_channels,
        sample_rate = fmt.sample_rate,
        bits_per_sample = fmt.bits_per_sample,
        "Parsed fmt chunk"
    );

    write!(out, "[SubChunk1Id: 'fmt ', size: {declared}, ")?;
    write!(
        out,
        "AudioFormat: '{}', ",
        codec::describe_codec(fmt.audio_format)
    )?;
    write!(out, "NumChannels: {}, ", fmt.num_channels)?;
    write!(out, "SampleRate: {}, ", fmt.sample_rate)?;
    write!(out, "ByteRate: {}, ", fmt.byte_rate)?;
    write!(out, "BlockAlign: {}, ", fmt.block_align)?;
    writeln!(out, "BitsPerSample: {}]", fmt.bits_per_sample)?;

    Ok(fmt)
}
