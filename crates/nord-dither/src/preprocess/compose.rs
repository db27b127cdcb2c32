//! Background fill and centered compositing.

use image::{Rgb, RgbImage, RgbaImage};

use super::Region;
use crate::display::DisplaySpec;

/// Build a full-display canvas filled with `background` and composite
/// `photo` over it at the region's offset.
///
/// Opaque photo pixels replace the background byte-for-byte; translucent
/// ones are blended source-over, so transparent PNG areas show the
/// background color.
///
/// # Panics (debug only)
///
/// Debug-asserts that `photo` has the region's dimensions.
pub fn compose(
    photo: &RgbaImage,
    display: DisplaySpec,
    region: Region,
    background: [u8; 3],
) -> RgbImage {
    debug_assert_eq!(
        photo.dimensions(),
        (region.width, region.height),
        "photo must already be resized to the region"
    );

    let mut canvas = RgbImage::from_pixel(display.width, display.height, Rgb(background));

    for (x, y, pixel) in photo.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(region.x + x, region.y + y);
        *dst = Rgb(blend_over(pixel.0, dst.0));
    }

    canvas
}

/// Source-over blend of a straight-alpha pixel onto an opaque one.
#[inline]
fn blend_over(src: [u8; 4], dst: [u8; 3]) -> [u8; 3] {
    match src[3] {
        255 => [src[0], src[1], src[2]],
        0 => dst,
        a => {
            let a = a as u32;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
            [mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2])]
        }
    }
}
