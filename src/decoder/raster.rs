//! Full-image RGBA raster decode.
//!
//! The engine hands back raw samples in whatever layout the file stored
//! (gray, gray+alpha, RGB, RGBA, CMYK, at 8 or 16 bits per sample). This
//! module normalizes those samples to 8-bit RGBA, then permutes the pixels
//! for the requested output orientation. Decoding is stop-on-error: a
//! corrupt stream fails the whole call, and the output buffer contents are
//! unspecified after a failure.

use tiff::decoder::DecodingResult;
use tiff::ColorType;
use tracing::debug;

use crate::diagnostics;
use crate::error::DecodeError;
use crate::orientation::Orientation;

use super::TiffHandle;

/// Bytes per output pixel (RGBA, 8 bits per channel).
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned RGBA8 raster in row-major order.
///
/// `width` and `height` are post-orientation: for the transposing
/// orientations (codes 5-8) they are the source dimensions swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaRaster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TiffHandle {
    /// Decode the full image into a caller-provided RGBA8 buffer.
    ///
    /// `width` and `height` declare the geometry the caller allocated `out`
    /// for; `out` must hold at least `width * height * 4` bytes. If the
    /// declared geometry differs from the image's intrinsic geometry, a
    /// warning goes through the diagnostics bridge and the decode proceeds
    /// at the intrinsic geometry (still bounds-checked against `out`) —
    /// what the caller gets in that case is the engine's raster, not a
    /// scaled or cropped reinterpretation.
    ///
    /// Pixels are written row-major at the orientation's output geometry
    /// (see [`Orientation::output_dimensions`]).
    pub fn decode_rgba_into(
        &mut self,
        width: u32,
        height: u32,
        orientation: Orientation,
        out: &mut [u8],
    ) -> Result<(), DecodeError> {
        let required = raster_bytes(width, height)?;
        if out.len() < required {
            return Err(DecodeError::OutputTooSmall {
                width,
                height,
                required,
                actual: out.len(),
            });
        }

        let (image_width, image_height) = self.decoder.dimensions()?;
        if (image_width, image_height) != (width, height) {
            diagnostics::emit_warning(
                "decode",
                &format!(
                    "requested geometry {width}x{height} differs from image geometry \
                     {image_width}x{image_height}; decoding at image geometry"
                ),
            );
            let intrinsic = raster_bytes(image_width, image_height)?;
            if out.len() < intrinsic {
                return Err(DecodeError::OutputTooSmall {
                    width: image_width,
                    height: image_height,
                    required: intrinsic,
                    actual: out.len(),
                });
            }
        }

        let color = self.decoder.colortype()?;
        let result = match self.decoder.read_image() {
            Ok(result) => result,
            Err(e) => {
                diagnostics::emit_error("decode", &e.to_string());
                return Err(DecodeError::Engine(e));
            }
        };

        let pixel_count = image_width as usize * image_height as usize;
        debug!(
            image_width,
            image_height,
            orientation = orientation.as_code(),
            "decoded raster"
        );

        if orientation == Orientation::TopLeft {
            normalize(color, result, pixel_count, &mut out[..pixel_count * BYTES_PER_PIXEL])
        } else {
            let mut scratch = vec![0u8; pixel_count * BYTES_PER_PIXEL];
            normalize(color, result, pixel_count, &mut scratch)?;
            orient(&scratch, image_width, image_height, orientation, out);
            Ok(())
        }
    }

    /// Decode the full image into a freshly allocated raster at the image's
    /// intrinsic dimensions.
    pub fn decode_rgba(&mut self, orientation: Orientation) -> Result<RgbaRaster, DecodeError> {
        let (width, height) = self.decoder.dimensions()?;
        let mut pixels = vec![0u8; raster_bytes(width, height)?];
        self.decode_rgba_into(width, height, orientation, &mut pixels)?;

        let (out_width, out_height) = orientation.output_dimensions(width, height);
        Ok(RgbaRaster {
            width: out_width,
            height: out_height,
            pixels,
        })
    }
}

/// Byte length of a `width` x `height` RGBA8 raster, overflow-checked.
fn raster_bytes(width: u32, height: u32) -> Result<usize, DecodeError> {
    (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL as u64))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or(DecodeError::DimensionOverflow { width, height })
}

// =============================================================================
// Sample Normalization
// =============================================================================

/// Normalize engine samples to RGBA8.
fn normalize(
    color: ColorType,
    result: DecodingResult,
    pixel_count: usize,
    out: &mut [u8],
) -> Result<(), DecodeError> {
    match result {
        DecodingResult::U8(samples) => normalize_u8(color, &samples, pixel_count, out),
        DecodingResult::U16(samples) => {
            // 16-bit channels keep their high byte, the standard narrowing.
            let narrowed: Vec<u8> = samples.iter().map(|s| (s >> 8) as u8).collect();
            normalize_u8(color, &narrowed, pixel_count, out)
        }
        _ => Err(DecodeError::UnsupportedSampleFormat),
    }
}

fn normalize_u8(
    color: ColorType,
    samples: &[u8],
    pixel_count: usize,
    out: &mut [u8],
) -> Result<(), DecodeError> {
    let channels = channel_count(color)?;
    let expected = pixel_count * channels;
    if samples.len() < expected {
        return Err(DecodeError::ShortRaster {
            expected,
            actual: samples.len(),
        });
    }

    match color {
        ColorType::Gray(_) => {
            for (pixel, g) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(samples) {
                pixel.copy_from_slice(&[*g, *g, *g, 255]);
            }
        }
        ColorType::GrayA(_) => {
            for (pixel, ga) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(samples.chunks_exact(2)) {
                pixel.copy_from_slice(&[ga[0], ga[0], ga[0], ga[1]]);
            }
        }
        ColorType::RGB(_) => {
            for (pixel, rgb) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(samples.chunks_exact(3)) {
                pixel.copy_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        ColorType::RGBA(_) => {
            out[..expected].copy_from_slice(&samples[..expected]);
        }
        ColorType::CMYK(_) => {
            for (pixel, cmyk) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(samples.chunks_exact(4)) {
                pixel.copy_from_slice(&[
                    cmyk_channel(cmyk[0], cmyk[3]),
                    cmyk_channel(cmyk[1], cmyk[3]),
                    cmyk_channel(cmyk[2], cmyk[3]),
                    255,
                ]);
            }
        }
        other => {
            return Err(DecodeError::UnsupportedColorType {
                found: format!("{other:?}"),
            })
        }
    }

    Ok(())
}

fn channel_count(color: ColorType) -> Result<usize, DecodeError> {
    match color {
        ColorType::Gray(_) => Ok(1),
        ColorType::GrayA(_) => Ok(2),
        ColorType::RGB(_) => Ok(3),
        ColorType::RGBA(_) | ColorType::CMYK(_) => Ok(4),
        other => Err(DecodeError::UnsupportedColorType {
            found: format!("{other:?}"),
        }),
    }
}

#[inline]
fn cmyk_channel(ink: u8, key: u8) -> u8 {
    ((255 - ink as u16) * (255 - key as u16) / 255) as u8
}

// =============================================================================
// Orientation Application
// =============================================================================

/// Permute a normalized RGBA8 raster into `out` at the given orientation.
fn orient(src: &[u8], width: u32, height: u32, orientation: Orientation, out: &mut [u8]) {
    let (out_width, _) = orientation.output_dimensions(width, height);
    for y in 0..height {
        for x in 0..width {
            let (dx, dy) = orientation.transform(x, y, width, height);
            let s = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
            let d = (dy as usize * out_width as usize + dx as usize) * BYTES_PER_PIXEL;
            out[d..d + BYTES_PER_PIXEL].copy_from_slice(&src[s..s + BYTES_PER_PIXEL]);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
