//! Assertion helpers for tests.

use std::path::Path;

use image::RgbImage;
use nord_dither::{Region, NORD};
use pretty_assertions::assert_eq;

/// Assert `path` is a PNG and decode it to RGB
pub fn read_png(path: &Path) -> RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output {} to exist: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(&bytes)
        .expect("decode output PNG")
        .to_rgb8()
}

/// Assert every pixel is one of the 16 Nord colors
pub fn assert_palette_only(image: &RgbImage) {
    for (x, y, p) in image.enumerate_pixels() {
        assert!(
            NORD.contains(p.0),
            "Pixel ({x},{y}) = {:?} is not a Nord color",
            p.0
        );
    }
}

/// Assert everything outside `region` is the nord0 background
pub fn assert_border_background(image: &RgbImage, region: Region) {
    for (x, y, p) in image.enumerate_pixels() {
        if !region.contains(x, y) {
            assert_eq!(p.0, NORD.background(), "Border pixel ({x},{y})");
        }
    }
}

/// Assert `path` is a valid Nord frame of the given size
pub fn assert_nord_frame(path: &Path, width: u32, height: u32) -> RgbImage {
    let image = read_png(path);
    assert_eq!(image.dimensions(), (width, height), "Frame dimensions");
    assert_palette_only(&image);
    image
}
