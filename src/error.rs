use thiserror::Error;

/// Errors that can occur when opening a TIFF buffer.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The engine rejected the buffer as a TIFF container.
    ///
    /// This covers bad magic bytes, an unsupported version word, a truncated
    /// header, or a first IFD that cannot be read. The buffer passed to
    /// `open` has already been freed when this error is returned.
    #[error("unrecognized TIFF container: {0}")]
    Container(#[from] tiff::TiffError),
}

/// Errors that can occur during a full-image raster decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The caller-provided output buffer cannot hold the requested raster.
    #[error(
        "output buffer too small: {width}x{height} RGBA needs {required} bytes, got {actual}"
    )]
    OutputTooSmall {
        width: u32,
        height: u32,
        required: usize,
        actual: usize,
    },

    /// `width * height * 4` does not fit in memory on this target.
    #[error("raster dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: u32, height: u32 },

    /// The image stores its pixels in a color space this layer cannot
    /// normalize to RGBA (e.g. YCbCr or palette data).
    #[error("unsupported color type: {found}")]
    UnsupportedColorType { found: String },

    /// The image stores samples wider or differently signed than the
    /// 8/16-bit unsigned formats this layer normalizes.
    #[error("unsupported sample format")]
    UnsupportedSampleFormat,

    /// The engine produced fewer samples than the image dimensions imply.
    #[error("short raster from engine: expected {expected} samples, got {actual}")]
    ShortRaster { expected: usize, actual: usize },

    /// The engine failed while reading or decompressing the image data.
    ///
    /// The output buffer contents are unspecified after this error; the
    /// decode may have written a partial raster before failing.
    #[error("raster decode failed: {0}")]
    Engine(#[from] tiff::TiffError),
}
