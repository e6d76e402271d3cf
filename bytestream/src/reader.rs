//! Forward-only byte reader with bounded operations.

use crate::error::{ByteError, ByteResult};

/// Maximum number of 7-bit groups in a varint before it is rejected.
pub const VARINT_MAX_GROUPS: usize = 5;

/// A forward-only reader for decoding little-endian binary data.
///
/// All read operations are bounds-checked and return errors on failure.
/// A failed fixed-width read, `read_bytes`, or `skip` leaves the position
/// unchanged. A failed `read_var_u32` has already consumed the groups it
/// read. Callers should treat the reader as unusable after any failure.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a `u32` (little-endian).
    pub fn read_u32(&mut self) -> ByteResult<u32> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Reads an `i32` (little-endian).
    pub fn read_i32(&mut self) -> ByteResult<i32> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    /// Reads an `i64` (little-endian).
    pub fn read_i64(&mut self) -> ByteResult<i64> {
        self.read_array::<8>().map(i64::from_le_bytes)
    }

    /// Reads an IEEE-754 `f32` (little-endian).
    pub fn read_f32(&mut self) -> ByteResult<f32> {
        self.read_array::<4>().map(f32::from_le_bytes)
    }

    /// Reads exactly `len` raw bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let data = self.data;
        let out = &data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Skips exactly `len` bytes.
    pub fn skip(&mut self, len: usize) -> ByteResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Reads a 7-bit continuation varint `u32`.
    ///
    /// Each byte contributes its low 7 bits, least significant group first.
    /// A clear high bit ends the value. Bits of the fifth group that do not
    /// fit in 32 bits are dropped; a fifth group that still has its
    /// continuation bit set is [`ByteError::InvalidVarint`].
    pub fn read_var_u32(&mut self) -> ByteResult<u32> {
        let mut result = 0u32;
        for group in 0..VARINT_MAX_GROUPS {
            let byte = self.read_u8()?;
            result |= u32::from(byte & 0x7F) << (group * 7);
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(ByteError::InvalidVarint)
    }

    fn ensure_bytes(&self, len: usize) -> ByteResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(ByteError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
