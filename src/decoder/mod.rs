//! Decode session lifecycle.
//!
//! A [`TiffHandle`] ties one opened engine session to the [`MemCursor`] it
//! reads through. Ownership is a strict chain: the handle owns the cursor,
//! the cursor owns the byte buffer, and nothing else may alias either. Drop
//! releases the whole chain exactly once, so double-close and use-after-close
//! are unrepresentable rather than merely documented.

mod fields;
mod raster;
pub mod tags;

pub use raster::{RgbaRaster, BYTES_PER_PIXEL};

use std::fmt;

use tiff::decoder::{Decoder, Limits};
use tracing::debug;

use crate::diagnostics;
use crate::error::{DecodeError, OpenError};
use crate::io::MemCursor;

// =============================================================================
// Decode Limits
// =============================================================================

/// Resource limits applied to the engine while parsing untrusted input.
///
/// A malformed TIFF can declare absurd dimensions or IFD value sizes; these
/// bounds cap what the engine will allocate on its behalf before failing the
/// open or decode instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum size of the decoded-image buffer, in bytes.
    pub decoding_buffer_size: usize,

    /// Maximum size of any single IFD value, in bytes.
    pub ifd_value_size: usize,

    /// Maximum size of intermediate decompression buffers, in bytes.
    pub intermediate_buffer_size: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            decoding_buffer_size: 512 << 20,
            ifd_value_size: 8 << 20,
            intermediate_buffer_size: 256 << 20,
        }
    }
}

impl DecodeLimits {
    fn into_engine(self) -> Limits {
        let mut limits = Limits::default();
        limits.decoding_buffer_size = self.decoding_buffer_size;
        limits.ifd_value_size = self.ifd_value_size;
        limits.intermediate_buffer_size = self.intermediate_buffer_size;
        limits
    }
}

// =============================================================================
// TiffHandle
// =============================================================================

/// An open, in-memory TIFF decode session.
///
/// Move-only by construction: the handle is the sole owner of the engine
/// session and the backing buffer, and dropping it tears both down. There is
/// no way to close twice or to use a closed handle.
///
/// All operations are synchronous and single-threaded; a decode blocks the
/// calling thread until the engine returns (there is no real I/O underneath,
/// only buffer reads).
pub struct TiffHandle {
    decoder: Decoder<MemCursor>,
}

// The engine session holds no Debug-formattable state worth printing;
// an opaque marker keeps the handle usable in assertions and logs.
impl fmt::Debug for TiffHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiffHandle").finish_non_exhaustive()
    }
}

impl TiffHandle {
    /// Open a decode session over `buffer` with default [`DecodeLimits`].
    ///
    /// Takes exclusive ownership of the buffer. On failure the buffer is
    /// consumed and freed by the failed open; callers that need to retry
    /// with the same bytes should keep their own copy.
    pub fn open(buffer: Vec<u8>) -> Result<Self, OpenError> {
        Self::open_with_limits(buffer, DecodeLimits::default())
    }

    /// Open a decode session with caller-tuned limits.
    pub fn open_with_limits(buffer: Vec<u8>, limits: DecodeLimits) -> Result<Self, OpenError> {
        let len = buffer.len();
        let cursor = MemCursor::new(buffer);

        let decoder = match Decoder::new(cursor) {
            Ok(decoder) => decoder.with_limits(limits.into_engine()),
            Err(e) => {
                diagnostics::emit_error("open", &e.to_string());
                return Err(OpenError::Container(e));
            }
        };

        debug!(len, "opened in-memory TIFF session");
        Ok(Self { decoder })
    }

    /// Intrinsic image dimensions `(width, height)` in pixels, as the engine
    /// reads them from the current directory.
    pub fn dimensions(&mut self) -> Result<(u32, u32), DecodeError> {
        Ok(self.decoder.dimensions()?)
    }

    /// Close the session, releasing the engine state, the cursor, and the
    /// backing buffer.
    ///
    /// Equivalent to dropping the handle; provided so call sites can make
    /// the teardown explicit.
    pub fn close(self) {}
}
