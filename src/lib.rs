//! # memtiff
//!
//! An in-memory TIFF decoder for sandboxed environments.
//!
//! This library decodes TIFF images from byte buffers without ever touching
//! a filesystem, making it suitable for sandboxed or embedded execution
//! environments where file I/O is unavailable. The input buffer is treated
//! as fully untrusted: malformed headers, truncated streams, and corrupt
//! offsets fail cleanly through `Result` values, never through a crash.
//!
//! ## Features
//!
//! - **Virtual file I/O**: a bounds-checked cursor substitutes for the file
//!   the decoding engine expects
//! - **Full-image RGBA decode**: gray, RGB, RGBA, and CMYK sources at 8 or
//!   16 bits per sample, normalized to RGBA8
//! - **Orientation transforms**: all eight TIFF orientation codes applied
//!   during rasterization
//! - **Defaulted field access**: numeric metadata tags read with
//!   TIFF-specification defaults, never failing on absent fields
//! - **Diagnostics bridge**: engine error and warning messages forwarded to
//!   embedder-registered sinks as a side channel
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`io`] - the buffer-backed virtual file ([`MemCursor`])
//! - [`decoder`] - session lifecycle, raster decode, and field accessors
//! - [`orientation`] - output orientation transforms
//! - [`diagnostics`] - the error/warning side channel
//! - [`error`] - error types
//! - [`config`] - CLI types for the `memtiff` binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use memtiff::{Orientation, TiffHandle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The buffer comes from wherever the embedding environment gets bytes:
//! // a network payload, a WASM linear-memory region, an archive entry.
//! let buffer: Vec<u8> = std::fs::read("image.tif")?;
//!
//! let mut handle = TiffHandle::open(buffer)?;
//! let (width, height) = handle.dimensions()?;
//! let raster = handle.decode_rgba(Orientation::TopLeft)?;
//! assert_eq!(raster.pixels.len(), (width * height * 4) as usize);
//!
//! // Dropping the handle releases the session and the buffer exactly once.
//! handle.close();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod orientation;

// Re-export commonly used types
pub use config::{Cli, Command, DecodeConfig, InfoConfig};
pub use decoder::{tags, DecodeLimits, RgbaRaster, TiffHandle, BYTES_PER_PIXEL};
pub use diagnostics::{install_sinks, DiagnosticSink, MAX_MESSAGE_LEN};
pub use error::{DecodeError, OpenError};
pub use io::{MemCursor, SeekWhence};
pub use orientation::Orientation;
