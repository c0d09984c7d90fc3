//! Output orientation transforms.
//!
//! TIFF defines eight orientation codes (tag 274) describing where the first
//! decoded row and column sit in display space. The raster entry point takes
//! one of these codes and permutes the decoded pixels accordingly, so the
//! caller always receives a raster laid out for direct display.

/// The eight TIFF orientation codes.
///
/// The name gives the display-space position of the image's first row and
/// first column: `TopLeft` is the identity, `RightTop` is a 90° clockwise
/// rotation, and so on. Codes 5-8 transpose the raster, swapping the output
/// width and height (the pixel count is unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Orientation {
    /// Row 0 at top, column 0 at left (identity).
    TopLeft = 1,

    /// Row 0 at top, column 0 at right (horizontal flip).
    TopRight = 2,

    /// Row 0 at bottom, column 0 at right (180° rotation).
    BottomRight = 3,

    /// Row 0 at bottom, column 0 at left (vertical flip).
    BottomLeft = 4,

    /// Row 0 at left, column 0 at top (transpose).
    LeftTop = 5,

    /// Row 0 at right, column 0 at top (90° clockwise rotation).
    RightTop = 6,

    /// Row 0 at right, column 0 at bottom (anti-transpose).
    RightBottom = 7,

    /// Row 0 at left, column 0 at bottom (90° counter-clockwise rotation).
    LeftBottom = 8,
}

impl Orientation {
    /// Create an Orientation from its TIFF code.
    ///
    /// Returns `None` for values outside 1-8.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            1 => Some(Orientation::TopLeft),
            2 => Some(Orientation::TopRight),
            3 => Some(Orientation::BottomRight),
            4 => Some(Orientation::BottomLeft),
            5 => Some(Orientation::LeftTop),
            6 => Some(Orientation::RightTop),
            7 => Some(Orientation::RightBottom),
            8 => Some(Orientation::LeftBottom),
            _ => None,
        }
    }

    /// Get the numeric TIFF code.
    #[inline]
    pub const fn as_code(self) -> u16 {
        self as u16
    }

    /// Whether this transform swaps the horizontal and vertical axes.
    #[inline]
    pub const fn swaps_axes(self) -> bool {
        matches!(
            self,
            Orientation::LeftTop
                | Orientation::RightTop
                | Orientation::RightBottom
                | Orientation::LeftBottom
        )
    }

    /// Output raster dimensions for a `width` x `height` source.
    #[inline]
    pub const fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Map a source pixel position to its destination position.
    ///
    /// `(x, y)` is a position in the `width` x `height` source raster; the
    /// result is the position in the [`Orientation::output_dimensions`]
    /// destination raster.
    pub const fn transform(self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::TopLeft => (x, y),
            Orientation::TopRight => (width - 1 - x, y),
            Orientation::BottomRight => (width - 1 - x, height - 1 - y),
            Orientation::BottomLeft => (x, height - 1 - y),
            Orientation::LeftTop => (y, x),
            Orientation::RightTop => (height - 1 - y, x),
            Orientation::RightBottom => (height - 1 - y, width - 1 - x),
            Orientation::LeftBottom => (y, width - 1 - x),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
