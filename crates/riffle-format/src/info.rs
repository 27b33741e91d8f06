//! The tagged-field grammar inside `LIST`/`INFO` chunks.
//!
//! An INFO payload is a 4-byte list type followed by fields of the form
//! `{4-byte tag, u32 size, size bytes of text}`. Writers pad odd-sized
//! fields with a NUL so the next tag starts on an even offset; some pad
//! with more than one. The scanner consumes any run of NULs between fields
//! and reports it, rather than insisting on exactly one alignment byte.

use std::io::Write;

use crate::cursor::Cursor;
use crate::error::{Result, RiffError};
use crate::render;

/// List type whose field grammar is known. Any other list type is shown
/// opaque rather than guessed at.
pub const INFO_TYPE: [u8; 4] = *b"INFO";

/// One scanned INFO field: its tag, the text payload, and how many NUL
/// bytes followed it before the next tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField<'a> {
    pub tag: [u8; 4],
    pub text: &'a [u8],
    pub trailing_nuls: usize,
}

/// An underrun in the middle of a field means the list payload ended
/// inside a tag or size field.
fn truncated(err: RiffError) -> RiffError {
    match err {
        RiffError::Underrun { needed, remaining } => RiffError::TruncatedTag { needed, remaining },
        other => other,
    }
}

/// Scan one field and the NUL run that follows it.
pub fn read_info_field<'a>(cursor: &mut Cursor<'a>) -> Result<InfoField<'a>> {
    let tag = cursor.read_tag().map_err(truncated)?;
    let declared = cursor.read_u32_le().map_err(truncated)?;
    if declared as usize > cursor.remaining() {
        return Err(RiffError::InfoFieldOverflow {
            tag: render::escape_bytes(&tag),
            declared,
            remaining: cursor.remaining(),
        });
    }
    let text = cursor.read(declared as usize)?;

    let mut trailing_nuls = 0;
    while cursor.peek() == Some(0x00) {
        cursor.read(1)?;
        trailing_nuls += 1;
    }

    Ok(InfoField {
        tag,
        text,
        trailing_nuls,
    })
}

/// Parse a `LIST` chunk payload and write its rendering to `out`.
///
/// The payload must be exactly the chunk's declared size; the scan runs to
/// the end of it. Non-`INFO` list types render as an ellipsis. The closing
/// bracket written here pairs with the opening `INFO[`; the caller owns the
/// enclosing chunk record's brackets.
pub fn parse_info_list<W: Write>(payload: &[u8], out: &mut W) -> Result<()> {
    let mut cursor = Cursor::new(payload);

    let list_type = cursor.read_tag().map_err(truncated)?;
    if list_type != INFO_TYPE {
        write!(out, "...")?;
        return Ok(());
    }

    writeln!(out, "INFO[")?;
    while !cursor.is_empty() {
        let field = read_info_field(&mut cursor)?;
        tracing::debug!(
            tag = %render::escape_bytes(&field.tag),
            size = field.text.len(),
            trailing_nuls = field.trailing_nuls,
            "Parsed INFO field"
        );

        write!(out, "\t")?;
        out.write_all(&field.tag)?;
        write!(out, "[size: {}, '", field.text.len())?;
        render::write_escaped(out, field.text)?;
        write!(out, "']")?;
        if field.trailing_nuls > 0 {
            write!(out, "Extra[")?;
            for _ in 0..field.trailing_nuls {
                write!(out, "\\0")?;
            }
            write!(out, "]")?;
        }
        writeln!(out)?;
    }
    write!(out, "]")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_field(buf: &mut Vec<u8>, tag: &[u8; 4], text: &[u8]) {
        buf.extend_from_slice(tag);
        buf.extend_from_slice(&(text.len() as u32).to_le_bytes());
        buf.extend_from_slice(text);
    }

    fn render_list(payload: &[u8]) -> Result<String> {
        let mut out = Vec::new();
        parse_info_list(payload, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_non_info_list_renders_ellipsis() {
        let mut payload = b"adtl".to_vec();
        payload.extend_from_slice(&[0xDE, 0xAD]);
        assert_eq!(render_list(&payload).unwrap(), "...");
    }

    #[test]
    fn test_type_tag_only_is_empty_list() {
        assert_eq!(render_list(b"INFO").unwrap(), "INFO[\n]");
    }

    #[test]
    fn test_single_field() {
        let mut payload = b"INFO".to_vec();
        push_field(&mut payload, b"IART", b"Alice");
        assert_eq!(
            render_list(&payload).unwrap(),
            "INFO[\n\tIART[size: 5, 'Alice']\n]"
        );
    }

    #[test]
    fn test_alignment_pad_shown_as_extra() {
        let mut payload = b"INFO".to_vec();
        push_field(&mut payload, b"IART", b"Alice");
        payload.push(0x00);
        assert_eq!(
            render_list(&payload).unwrap(),
            "INFO[\n\tIART[size: 5, 'Alice']Extra[\\0]\n]"
        );
    }

    #[test]
    fn test_nul_run_consumed_whole() {
        let mut payload = b"INFO".to_vec();
        push_field(&mut payload, b"ICMT", b"hi");
        payload.extend_from_slice(&[0x00, 0x00, 0x00]);
        assert_eq!(
            render_list(&payload).unwrap(),
            "INFO[\n\tICMT[size: 2, 'hi']Extra[\\0\\0\\0]\n]"
        );
    }

    #[test]
    fn test_padded_and_unpadded_fields_interleave() {
        // Odd-sized field padded to even, then an even-sized field.
        let mut payload = b"INFO".to_vec();
        push_field(&mut payload, b"IART", b"Alice");
        payload.push(0x00);
        push_field(&mut payload, b"INAM", b"Song");
        assert_eq!(
            render_list(&payload).unwrap(),
            "INFO[\n\
             \tIART[size: 5, 'Alice']Extra[\\0]\n\
             \tINAM[size: 4, 'Song']\n\
             ]"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut payload = b"INFO".to_vec();
        push_field(&mut payload, b"ICMT", b"li\nne");
        assert_eq!(
            render_list(&payload).unwrap(),
            "INFO[\n\tICMT[size: 5, 'li\\nne']\n]"
        );
    }

    #[test]
    fn test_field_overflow() {
        let mut payload = b"INFO".to_vec();
        payload.extend_from_slice(b"IART");
        payload.extend_from_slice(&100u32.to_le_bytes());
        let result = render_list(&payload);
        match result {
            Err(RiffError::InfoFieldOverflow {
                tag,
                declared,
                remaining,
            }) => {
                assert_eq!(tag, "IART");
                assert_eq!(declared, 100);
                assert_eq!(remaining, 0);
            }
            other => panic!("expected InfoFieldOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_list_type() {
        let result = render_list(b"IN");
        assert!(matches!(
            result,
            Err(RiffError::TruncatedTag {
                needed: 4,
                remaining: 2,
            })
        ));
    }

    #[test]
    fn test_truncated_field_tag() {
        let mut payload = b"INFO".to_vec();
        payload.extend_from_slice(b"IA");
        let result = render_list(&payload);
        assert!(matches!(
            result,
            Err(RiffError::TruncatedTag {
                needed: 4,
                remaining: 2,
            })
        ));
    }

    #[test]
    fn test_read_info_field_stops_at_next_tag() {
        let mut payload = Vec::new();
        push_field(&mut payload, b"IART", b"Bob");
        payload.push(0x00);
        push_field(&mut payload, b"INAM", b"Tune");
        let mut cursor = Cursor::new(&payload);

        let field = read_info_field(&mut cursor).unwrap();
        assert_eq!(field.tag, *b"IART");
        assert_eq!(field.text, b"Bob");
        assert_eq!(field.trailing_nuls, 1);

        let field = read_info_field(&mut cursor).unwrap();
        assert_eq!(field.tag, *b"INAM");
        assert_eq!(field.text, b"Tune");
        assert_eq!(field.trailing_nuls, 0);
        assert!(cursor.is_empty());
    }
}
