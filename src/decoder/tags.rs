//! TIFF tag ids for use with the field accessors.
//!
//! Tags are 16-bit identifiers defined by the TIFF specification. The field
//! accessors take raw tag ids so any tag can be queried, including ones not
//! listed here; these constants just name the ones callers commonly want.

/// Image width in pixels.
pub const IMAGE_WIDTH: u16 = 256;

/// Image height (length) in pixels.
pub const IMAGE_LENGTH: u16 = 257;

/// Bits per sample. Spec default: 1.
pub const BITS_PER_SAMPLE: u16 = 258;

/// Compression scheme. Spec default: 1 (uncompressed).
pub const COMPRESSION: u16 = 259;

/// Photometric interpretation (gray, RGB, YCbCr, ...).
pub const PHOTOMETRIC_INTERPRETATION: u16 = 262;

/// Thresholding applied to grayscale data. Spec default: 1.
pub const THRESHHOLDING: u16 = 263;

/// Bit order within bytes. Spec default: 1 (MSB first).
pub const FILL_ORDER: u16 = 266;

/// Free-form description string.
pub const IMAGE_DESCRIPTION: u16 = 270;

/// Display orientation of the stored raster. Spec default: 1 (top-left).
pub const ORIENTATION: u16 = 274;

/// Number of components per pixel. Spec default: 1.
pub const SAMPLES_PER_PIXEL: u16 = 277;

/// Rows per strip for strip-organized images.
pub const ROWS_PER_STRIP: u16 = 278;

/// Pixels per resolution unit, horizontal.
pub const X_RESOLUTION: u16 = 282;

/// Pixels per resolution unit, vertical.
pub const Y_RESOLUTION: u16 = 283;

/// Component layout (chunky vs planar). Spec default: 1 (chunky).
pub const PLANAR_CONFIGURATION: u16 = 284;

/// Unit for the resolution tags. Spec default: 2 (inch).
pub const RESOLUTION_UNIT: u16 = 296;

/// Predictor applied before compression. Spec default: 1 (none).
pub const PREDICTOR: u16 = 317;

/// Tile width for tile-organized images.
pub const TILE_WIDTH: u16 = 322;

/// Tile height (length) for tile-organized images.
pub const TILE_LENGTH: u16 = 323;
