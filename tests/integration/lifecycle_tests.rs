//! Handle lifecycle integration tests.
//!
//! Tests verify:
//! - Open followed by close (or drop) releases everything exactly once;
//!   the move-only handle makes a second close unrepresentable
//! - Malformed, truncated, and empty buffers fail `open` cleanly
//! - Random byte buffers never panic the opener (fuzz-style property)

use proptest::prelude::*;

use memtiff::{DecodeLimits, Orientation, TiffHandle};

use super::test_utils::{is_tiff_magic, rgb_2x2};

// =============================================================================
// Open/Close Discipline
// =============================================================================

#[test]
fn test_open_then_close() {
    let handle = TiffHandle::open(rgb_2x2()).unwrap();
    // Explicit close consumes the handle; the buffer goes with it. A second
    // close would not compile, which is the whole point of the move-only
    // design.
    handle.close();
}

#[test]
fn test_open_then_drop() {
    let handle = TiffHandle::open(rgb_2x2()).unwrap();
    drop(handle);
}

#[test]
fn test_full_session_open_query_decode_close() {
    let data = rgb_2x2();
    assert!(is_tiff_magic(&data));

    let mut handle = TiffHandle::open(data).unwrap();
    let (width, height) = handle.dimensions().unwrap();
    let raster = handle.decode_rgba(Orientation::TopLeft).unwrap();
    assert_eq!(raster.pixels.len(), (width * height * 4) as usize);
    handle.close();
}

// =============================================================================
// Malformed Input
// =============================================================================

#[test]
fn test_handle_and_errors_are_debug_formattable() {
    // Both sides of the open Result format with {:?}, which is what
    // unwrap()/unwrap_err() in the rest of the suite rely on.
    let handle = TiffHandle::open(rgb_2x2()).unwrap();
    assert!(format!("{handle:?}").contains("TiffHandle"));
    handle.close();

    let err = TiffHandle::open(vec![0, 1, 2]).unwrap_err();
    assert!(!format!("{err:?}").is_empty());
}

#[test]
fn test_open_empty_buffer_fails() {
    assert!(TiffHandle::open(Vec::new()).is_err());
}

#[test]
fn test_open_garbage_fails() {
    let err = TiffHandle::open(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]).unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("unrecognized TIFF container"),
        "unexpected message: {message}"
    );
}

#[test]
fn test_open_bare_magic_fails() {
    // Valid magic, then nothing: the IFD offset is missing.
    assert!(TiffHandle::open(vec![0x49, 0x49, 0x2A, 0x00]).is_err());
}

#[test]
fn test_truncated_prefixes_never_panic() {
    // Every prefix of a valid file either opens (and then decodes or
    // fails) or is rejected; none of them may crash.
    let full = rgb_2x2();
    for len in 0..full.len() {
        let cut = full[..len].to_vec();
        if let Ok(mut handle) = TiffHandle::open(cut) {
            let _ = handle.decode_rgba(Orientation::TopLeft);
        }
    }
}

// =============================================================================
// Fuzz-Style Properties
// =============================================================================

proptest! {
    #[test]
    fn open_never_panics_on_random_buffers(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = TiffHandle::open(data);
    }

    #[test]
    fn open_with_magic_prefix_never_panics(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
        // Force past the magic check so the IFD walker sees the noise. Tight
        // limits keep a randomly coherent IFD from asking for big buffers.
        let limits = DecodeLimits {
            decoding_buffer_size: 1 << 20,
            ifd_value_size: 1 << 20,
            intermediate_buffer_size: 1 << 20,
        };
        let mut data = vec![0x49, 0x49, 0x2A, 0x00];
        data.extend(tail);
        if let Ok(mut handle) = TiffHandle::open_with_limits(data, limits) {
            let _ = handle.decode_rgba(Orientation::TopLeft);
        }
    }
}
