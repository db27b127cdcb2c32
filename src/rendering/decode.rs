//! Photo decoding.

use image::DynamicImage;

/// Decode a JPEG or PNG from memory.
///
/// The format is sniffed from the content, not taken from the file name,
/// so a mislabeled `.jpg` that is really a PNG still decodes.
pub fn decode_photo(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}
