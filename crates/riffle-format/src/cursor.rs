//! Bounds-checked cursor over a borrowed byte buffer.
//!
//! Every read the parser performs goes through [`Cursor`]; no other module
//! indexes the backing buffer directly. That makes the bounds check a single
//! choke point instead of something each call site re-derives — the class of
//! bug where one site forgets the check cannot exist.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, RiffError};

/// A read-only cursor over a byte slice.
///
/// Invariant: `pos <= data.len()` at every observable point. A read that
/// would cross the end fails with [`RiffError::Underrun`] and leaves the
/// position unchanged — there is no partial advance.
///
/// All multi-byte integers are little-endian, matching the `RIFF` layout.
/// The big-endian `RIFX` variant is rejected before any integer is decoded.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes left between the current position and the end of the view.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read the next `n` bytes and advance past them.
    ///
    /// Fails without advancing if fewer than `n` bytes remain.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        if self
            .pos
            .checked_add(n)
            .is_none_or(|end| end > self.data.len())
        {
            return Err(RiffError::Underrun {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read a 4-byte chunk or list tag.
    pub fn read_tag(&mut self) -> Result<[u8; 4]> {
        let bytes = self.read(4)?;
        let mut tag = [0u8; 4];
        tag.copy_from_slice(bytes);
        Ok(tag)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read(2)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read(4)?))
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }
}
