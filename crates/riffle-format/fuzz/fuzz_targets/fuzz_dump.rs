//! Fuzz target for the full structural dump.
//!
//! Feeds arbitrary bytes through `dump` to find panics or out-of-bounds
//! reads in the chunk walker. Every failure must surface as an error
//! value, never as a crash.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let _ = riffle_format::dump(data, &mut out);
});
