//! Shared helpers for building synthetic in-memory TIFF files.
//!
//! Every buffer is produced by the engine's own encoder, so the decoder side
//! is exercised against well-formed streams without any fixture files on
//! disk.

use std::io::Cursor;

use tiff::encoder::{colortype, TiffEncoder};

/// Encode an RGB8 image with the given samples (3 bytes per pixel).
pub fn rgb8_tiff(width: u32, height: u32, samples: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut buf).unwrap();
        encoder
            .write_image::<colortype::RGB8>(width, height, samples)
            .unwrap();
    }
    buf.into_inner()
}

/// Encode a grayscale 8-bit image (1 byte per pixel).
pub fn gray8_tiff(width: u32, height: u32, samples: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut buf).unwrap();
        encoder
            .write_image::<colortype::Gray8>(width, height, samples)
            .unwrap();
    }
    buf.into_inner()
}

/// Encode an RGBA8 image (4 bytes per pixel).
pub fn rgba8_tiff(width: u32, height: u32, samples: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut buf).unwrap();
        encoder
            .write_image::<colortype::RGBA8>(width, height, samples)
            .unwrap();
    }
    buf.into_inner()
}

/// Encode an RGB16 image (3 u16 values per pixel).
pub fn rgb16_tiff(width: u32, height: u32, samples: &[u16]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut buf).unwrap();
        encoder
            .write_image::<colortype::RGB16>(width, height, samples)
            .unwrap();
    }
    buf.into_inner()
}

/// A 2x2 RGB test image: red, green / blue, white, row-major.
pub fn rgb_2x2() -> Vec<u8> {
    rgb8_tiff(
        2,
        2,
        &[
            255, 0, 0, // (0, 0) red
            0, 255, 0, // (1, 0) green
            0, 0, 255, // (0, 1) blue
            255, 255, 255, // (1, 1) white
        ],
    )
}

/// Check for the classic TIFF magic in either byte order.
pub fn is_tiff_magic(data: &[u8]) -> bool {
    data.len() >= 4
        && (data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]))
}
