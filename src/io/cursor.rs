use std::io::{self, Read, Seek, SeekFrom, Write};

/// Reference point for a [`MemCursor::seek_raw`] displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekWhence {
    /// Displacement from the start of the buffer.
    Start,

    /// Displacement from the current read offset.
    Current,

    /// Displacement from the end of the buffer.
    End,
}

// =============================================================================
// MemCursor
// =============================================================================

/// A read-only virtual file over an owned byte buffer.
///
/// `MemCursor` is the seam between the in-memory buffer the caller supplies
/// and the file-oriented decoding engine. It owns the buffer exclusively and
/// exposes the capability set the engine expects: bounds-checked reads, size
/// reporting, seeking, and zero-copy access to the whole buffer.
///
/// # Seek clamping
///
/// Seeks are clamped at the upper bound: the stored offset never exceeds the
/// buffer size. Seeks are *not* clamped at the lower bound; a negative
/// computed offset is stored as-is and the engine's own handling of the
/// result applies. See [`MemCursor::seek_raw`]. Reads made while the offset
/// is out of range return 0 bytes, so the buffer bound is never crossed
/// either way.
#[derive(Debug)]
pub struct MemCursor {
    buffer: Vec<u8>,
    offset: i64,
}

impl MemCursor {
    /// Create a cursor owning `buffer`, positioned at offset 0.
    pub fn new(buffer: Vec<u8>) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Declared size of the buffer in bytes.
    ///
    /// Constant for the lifetime of the cursor; reads and seeks never
    /// change it.
    #[inline]
    pub fn len(&self) -> u64 {
        self.buffer.len() as u64
    }

    /// Check whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current read offset.
    ///
    /// Signed because a negative seek result is stored unclamped.
    #[inline]
    pub fn position(&self) -> i64 {
        self.offset
    }

    /// Zero-copy view of the whole buffer, independent of the read offset.
    ///
    /// This is the memory-map analogue of the virtual file: the buffer is
    /// already resident, so mapping always succeeds and unmapping is a no-op
    /// (ownership stays with the cursor).
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Rewind the read offset to 0.
    ///
    /// This is the close analogue of the virtual file. It does not release
    /// the buffer; releasing the buffer is the decode handle's job, when the
    /// whole session is dropped.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Consume the cursor and recover the owned buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Move the read offset by `amount` relative to `whence` and return the
    /// resulting offset.
    ///
    /// The result is clamped so it never exceeds the buffer size. There is
    /// no lower clamp: a negative result is stored and returned as-is, and
    /// resolving what that means is left to the engine driving the cursor.
    pub fn seek_raw(&mut self, amount: i64, whence: SeekWhence) -> i64 {
        let base = match whence {
            SeekWhence::Start => 0,
            SeekWhence::Current => self.offset,
            SeekWhence::End => self.buffer.len() as i64,
        };

        let size = self.buffer.len() as i64;
        let mut target = base.saturating_add(amount);
        if target > size {
            target = size;
        }

        self.offset = target;
        target
    }
}

// =============================================================================
// std::io integration (the engine's view of the cursor)
// =============================================================================

impl Read for MemCursor {
    /// Copy up to `out.len()` bytes from the buffer at the current offset.
    ///
    /// Returns the number of bytes copied, which is `min(out.len(),
    /// size - offset)`. A read at or past the end of the buffer (or at a
    /// negative offset) returns `Ok(0)`; it is not an error.
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let size = self.buffer.len();
        if self.offset < 0 || self.offset as usize >= size {
            return Ok(0);
        }

        let start = self.offset as usize;
        let n = out.len().min(size - start);
        out[..n].copy_from_slice(&self.buffer[start..start + n]);
        self.offset += n as i64;
        Ok(n)
    }
}

impl Seek for MemCursor {
    /// Seek with [`MemCursor::seek_raw`] semantics.
    ///
    /// The std `Seek` contract has no representation for a negative offset,
    /// so when the raw seek lands below zero this returns `InvalidInput` and
    /// the engine sees a failed seek.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let result = match pos {
            SeekFrom::Start(n) => {
                // A displacement beyond i64::MAX would already be past any
                // real buffer; the upper clamp catches it either way.
                let n = i64::try_from(n).unwrap_or(i64::MAX);
                self.seek_raw(n, SeekWhence::Start)
            }
            SeekFrom::Current(n) => self.seek_raw(n, SeekWhence::Current),
            SeekFrom::End(n) => self.seek_raw(n, SeekWhence::End),
        };

        u64::try_from(result).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek to a negative offset")
        })
    }
}

impl Write for MemCursor {
    /// Writes are unsupported: this is a read-only virtual file.
    ///
    /// Every write accepts 0 bytes, which surfaces as `WriteZero` to callers
    /// that insist on writing everything.
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Ok(0)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
