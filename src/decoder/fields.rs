//! Defaulted numeric field accessors.
//!
//! Metadata lookup never fails: querying a tag the image does not carry
//! returns the TIFF-specification default for the handful of tags that
//! define one, and 0 for everything else. A value the engine cannot read, or
//! one too wide for the requested width, falls back the same way. Missing
//! optional metadata is simply not an error condition in this contract.

use tiff::tags::Tag;

use super::{tags, TiffHandle};

impl TiffHandle {
    /// Read a numeric field as a 32-bit value.
    ///
    /// Returns the field's defaulted value when the tag is absent or
    /// unreadable; see [`spec_default`] for the tags with non-zero defaults.
    pub fn field_u32(&mut self, tag: u16) -> u32 {
        self.raw_field(tag)
            .unwrap_or_else(|| u32::from(spec_default(tag)))
    }

    /// Read a numeric field as a 16-bit value.
    ///
    /// A stored value wider than 16 bits counts as unreadable at this width
    /// and yields the default, like libtiff reading through a `uint16*`
    /// out-parameter would never see it.
    pub fn field_u16(&mut self, tag: u16) -> u16 {
        self.raw_field(tag)
            .and_then(|value| u16::try_from(value).ok())
            .unwrap_or_else(|| spec_default(tag))
    }

    // Multi-valued tags (e.g. BitsPerSample with one entry per component)
    // read their first value, matching classic reader behavior.
    fn raw_field(&mut self, tag: u16) -> Option<u32> {
        match self.decoder.find_tag(Tag::from_u16_exhaustive(tag)) {
            Ok(Some(value)) => value
                .into_u32_vec()
                .ok()
                .and_then(|values| values.first().copied()),
            _ => None,
        }
    }
}

/// TIFF-specification default for a tag, or 0 when the spec defines none.
///
/// This mirrors the defaulted-read behavior of classic TIFF readers: a
/// handful of tags have mandated defaults that apply when the field is not
/// written, and every other absent field reads as 0.
pub(super) fn spec_default(tag: u16) -> u16 {
    match tag {
        tags::BITS_PER_SAMPLE => 1,
        tags::COMPRESSION => 1,
        tags::THRESHHOLDING => 1,
        tags::FILL_ORDER => 1,
        tags::ORIENTATION => 1,
        tags::SAMPLES_PER_PIXEL => 1,
        tags::PLANAR_CONFIGURATION => 1,
        tags::RESOLUTION_UNIT => 2,
        tags::PREDICTOR => 1,
        _ => 0,
    }
}
