//! Terminal-safe rendering of raw byte runs.
//!
//! Chunk payloads and INFO field text come straight out of an untrusted
//! file, so anything outside the printable range is escaped before it
//! reaches the dump. The same escaping feeds error messages that need to
//! show an offending tag.

use std::io::Write;

use crate::error::Result;

/// Whether every byte of `bytes` is printable ASCII (`0x20..=0x7E`).
///
/// Vacuously true for an empty slice. Used both as the chunk-ID sanity
/// guard and to decide whether a payload is rendered as text or elided.
pub fn is_printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| (b' '..=b'~').contains(&b))
}

/// Write `bytes` to `out`, escaping anything that could garble a terminal.
///
/// NUL renders as `\0`, newline as `\n`, printable ASCII as itself, and
/// every other byte as `\??`.
pub fn write_escaped<W: Write>(out: &mut W, bytes: &[u8]) -> Result<()> {
    for &b in bytes {
        match b {
            0x00 => write!(out, "\\0")?,
            b'\n' => write!(out, "\\n")?,
            b' '..=b'~' => out.write_all(&[b])?,
            _ => write!(out, "\\??")?,
        }
    }
    Ok(())
}

/// Escape `bytes` into an owned string, for embedding in error messages.
///
/// Same escape table as [`write_escaped`].
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut escaped = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            0x00 => escaped.push_str("\\0"),
            b'\n' => escaped.push_str("\\n"),
            b' '..=b'~' => escaped.push(b as char),
            _ => escaped.push_str("\\??"),
        }
    }
    escaped
}
