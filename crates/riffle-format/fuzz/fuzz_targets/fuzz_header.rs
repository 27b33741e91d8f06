//! Fuzz target seeded with a valid RIFF preamble.
//!
//! Prepends `RIFF`, a satisfiable chunk size, and `WAVE` so the fuzzer
//! spends its time past the magic checks, inside the fmt parser and the
//! subchunk walker.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let declared = u32::try_from(data.len())
        .unwrap_or(u32::MAX)
        .saturating_add(4);

    let mut input = Vec::with_capacity(12 + data.len());
    input.extend_from_slice(b"RIFF");
    input.extend_from_slice(&declared.to_le_bytes());
    input.extend_from_slice(b"WAVE");
    input.extend_from_slice(data);

    let mut out = Vec::new();
    let _ = riffle_format::dump(&input, &mut out);
});
