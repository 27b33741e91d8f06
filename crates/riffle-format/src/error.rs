//! Error types for the riffle-format crate.

use thiserror::Error;

/// Errors that can occur while parsing a RIFF container.
///
/// Every variant is fatal to the parse: the first violated check is reported
/// and no recovery, skipping, or resynchronization is attempted. Variants
/// carry the numeric values a diagnostic needs — the declared size that was
/// claimed and the bytes that were actually available.
#[derive(Error, Debug)]
pub enum RiffError {
    #[error("Unexpected end of data: needed {needed} bytes, {remaining} remain")]
    Underrun { needed: usize, remaining: usize },

    #[error("Not a RIFF container: expected 'RIFF', found '{found}'")]
    BadMagic { found: String },

    #[error("Big-endian RIFX containers are not supported")]
    RifxUnsupported,

    #[error("RIFF header ChunkSize {declared} exceeds the {available} bytes available in the file")]
    SizeOverflow { declared: u32, available: usize },

    #[error("Expected 'fmt ' chunk after the RIFF header, found '{found}'")]
    MissingFmtChunk { found: String },

    #[error("fmt chunk declares {declared} bytes, expected {expected}")]
    UnexpectedFmtSize { declared: u32, expected: u32 },

    #[error("Truncated header: needed {needed} bytes, {remaining} remain")]
    TruncatedHeader { needed: usize, remaining: usize },

    #[error("Truncated ID for subchunk {index}: needed {needed} bytes, {remaining} remain")]
    TruncatedId {
        index: u32,
        needed: usize,
        remaining: usize,
    },

    #[error("Subchunk {index} ID '{found}' contains non-printable bytes")]
    NonAsciiChunkId { index: u32, found: String },

    #[error("Subchunk {index} size {declared} exceeds the {remaining} bytes remaining in the file")]
    ChunkSizeOverflow {
        index: u32,
        declared: u32,
        remaining: usize,
    },

    #[error("Truncated INFO field: needed {needed} bytes, {remaining} remain")]
    TruncatedTag { needed: usize, remaining: usize },

    #[error("INFO field '{tag}' size {declared} exceeds the {remaining} bytes remaining in the list")]
    InfoFieldOverflow {
        tag: String,
        declared: u32,
        remaining: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RiffError>;
