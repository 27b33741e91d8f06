//! Example: dump the structure of an in-memory WAV file.
//!
//! Builds a small WAV buffer with a `data` chunk and a `LIST`/`INFO`
//! metadata block, then prints its structural dump to stdout.

use std::io::Write;

fn push_chunk(buf: &mut Vec<u8>, id: &[u8; 4], payload: &[u8]) {
    buf.extend_from_slice(id);
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(payload);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // fmt payload: 44.1 kHz stereo 16-bit PCM
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&2u16.to_le_bytes());
    fmt.extend_from_slice(&44100u32.to_le_bytes());
    fmt.extend_from_slice(&176_400u32.to_le_bytes());
    fmt.extend_from_slice(&4u16.to_le_bytes());
    fmt.extend_from_slice(&16u16.to_le_bytes());

    // LIST/INFO with an artist and a title, odd field padded to even
    let mut list = b"INFO".to_vec();
    push_chunk(&mut list, b"IART", b"Alice");
    list.push(0x00);
    push_chunk(&mut list, b"INAM", b"Demo Tune");
    list.push(0x00);

    let mut body = Vec::new();
    body.extend_from_slice(b"WAVE");
    push_chunk(&mut body, b"fmt ", &fmt);
    push_chunk(&mut body, b"data", &[0x00, 0x01, 0x02, 0x03]);
    push_chunk(&mut body, b"LIST", &list);

    let mut file = Vec::new();
    file.extend_from_slice(b"RIFF");
    file.extend_from_slice(&(body.len() as u32).to_le_bytes());
    file.extend_from_slice(&body);

    println!("=== {} byte WAV ===", file.len());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    riffle_format::dump(&file, &mut out)?;
    out.flush()?;

    Ok(())
}
