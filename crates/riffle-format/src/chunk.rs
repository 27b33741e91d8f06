//! Top-level subchunk walking: everything between the `fmt ` chunk and the
//! end of the file.

use std::io::Write;

use crate::cursor::Cursor;
use crate::error::{Result, RiffError};
use crate::info;
use crate::render;

/// Chunk ID introducing a nested list chunk.
pub const LIST_ID: [u8; 4] = *b"LIST";

/// A subchunk header as it appears on the wire: 4 raw ID bytes followed by
/// a little-endian u32 payload size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub declared_size: u32,
}

/// How the walker treats a chunk's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkClass {
    /// A `LIST` chunk; the payload carries its own tagged-field grammar.
    List,
    /// Payload is entirely printable ASCII and is shown as text.
    Text,
    /// Anything else; shown as an ellipsis and never interpreted.
    Opaque,
}

/// Classify a chunk by its ID and payload content. An empty payload counts
/// as text (there is nothing unprintable in it).
pub fn classify(id: [u8; 4], payload: &[u8]) -> ChunkClass {
    if id == LIST_ID {
        ChunkClass::List
    } else if render::is_printable_ascii(payload) {
        ChunkClass::Text
    } else {
        ChunkClass::Opaque
    }
}

/// Read one subchunk header, validating the ID bytes and the declared size
/// before any payload byte is touched.
///
/// `index` is the display number of the chunk being read; it appears in
/// every diagnostic so a failure names the chunk it happened in.
pub fn read_chunk_header(cursor: &mut Cursor<'_>, index: u32) -> Result<ChunkHeader> {
    let id = cursor.read_tag().map_err(|err| match err {
        RiffError::Underrun { needed, remaining } => RiffError::TruncatedId {
            index,
            needed,
            remaining,
        },
        other => other,
    })?;

    // Four non-printable ID bytes mean the walk has desynchronized from the
    // chunk grid, not that the file uses an exotic chunk type.
    if !render::is_printable_ascii(&id) {
        return Err(RiffError::NonAsciiChunkId {
            index,
            found: render::escape_bytes(&id),
        });
    }

    let declared_size = cursor.read_u32_le()?;
    if declared_size as usize > cursor.remaining() {
        return Err(RiffError::ChunkSizeOverflow {
            index,
            declared: declared_size,
            remaining: cursor.remaining(),
        });
    }

    Ok(ChunkHeader { id, declared_size })
}

/// Walk every remaining subchunk, writing one dump record per chunk.
///
/// Chunks are numbered for display from `first_index` upward. The cursor
/// advances by exactly the declared payload size per chunk; a word-alignment
/// pad byte after an odd-sized payload is NOT skipped here, so such a byte
/// surfaces as a desynchronization error on the next iteration. Each record
/// is buffered and written whole, so a chunk that fails any check or whose
/// list payload fails to parse contributes nothing to `out`.
///
/// Returns the number of subchunks walked.
pub fn walk_subchunks<W: Write>(
    cursor: &mut Cursor<'_>,
    first_index: u32,
    out: &mut W,
) -> Result<u32> {
    let mut walked = 0u32;

    while !cursor.is_empty() {
        let index = first_index + walked;
        let header = read_chunk_header(cursor, index)?;
        // Cannot underrun: declared_size was checked against remaining().
        let payload = cursor.read(header.declared_size as usize)?;
        tracing::debug!(
            index,
            id = %render::escape_bytes(&header.id),
            size = header.declared_size,
            "Walking subchunk"
        );

        let mut record = Vec::new();
        write!(record, "[SubChunk{index}Id: '")?;
        record.write_all(&header.id)?;
        write!(record, "', size: {}, ", header.declared_size)?;
        match classify(header.id, payload) {
            ChunkClass::List => info::parse_info_list(payload, &mut record)?,
            ChunkClass::Text => render::write_escaped(&mut record, payload)?,
            ChunkClass::Opaque => write!(record, "...")?,
        }
        writeln!(record, "]")?;
        out.write_all(&record)?;

        walked += 1;
    }

    Ok(walked)
}
