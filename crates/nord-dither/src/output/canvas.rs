//! Canvas struct: the finished display-sized frame.

use image::RgbImage;

use crate::palette::Palette;
use crate::preprocess::Region;

/// The output of the pipeline: a display-sized RGB frame plus the region
/// the photo occupies.
///
/// After [`FrameDitherer::dither`](crate::FrameDitherer::dither) every pixel
/// is an exact palette color: the border is the background entry and the
/// region holds dithered palette colors.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgb, RgbImage};
/// use nord_dither::{DisplaySpec, FrameDitherer, NORD};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([200, 60, 90])));
/// let ditherer = FrameDitherer::new(DisplaySpec::new(64, 48));
/// let canvas = ditherer
///     .dither(&photo, &mut StdRng::seed_from_u64(3))
///     .unwrap();
///
/// assert_eq!((canvas.width(), canvas.height()), (64, 48));
/// assert_eq!(canvas.pixel(0, 0), NORD.background());
/// assert!(canvas.palette_indices(&NORD).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
    region: Region,
}

impl Canvas {
    /// Wrap an already composed frame.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `region` lies inside `image`.
    pub fn new(image: RgbImage, region: Region) -> Self {
        debug_assert!(
            region.x + region.width <= image.width() && region.y + region.height <= image.height(),
            "region {region:?} exceeds canvas {}x{}",
            image.width(),
            image.height(),
        );
        Self { image, region }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Where the photo sits on the canvas.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// RGB bytes at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    #[inline]
    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn as_rgb_image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    #[inline]
    pub fn into_rgb_image(self) -> RgbImage {
        self.image
    }

    /// Map every pixel to its index in `palette`, row-major.
    ///
    /// Returns `None` if any pixel is not an exact palette color, which
    /// means the canvas has not been dithered yet.
    pub fn palette_indices(&self, palette: &Palette) -> Option<Vec<u8>> {
        self.image
            .pixels()
            .map(|p| palette.index_of(p.0).map(|i| i as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::NORD;
    use image::Rgb;

    fn region() -> Region {
        Region {
            x: 1,
            y: 1,
            width: 2,
            height: 1,
        }
    }

    #[test]
    fn test_accessors() {
        let canvas = Canvas::new(RgbImage::from_pixel(4, 3, Rgb([46, 52, 64])), region());
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.region(), region());
        assert_eq!(canvas.pixel(3, 2), [46, 52, 64]);
        assert_eq!(canvas.as_rgb_image().dimensions(), (4, 3));
        assert_eq!(canvas.into_rgb_image().dimensions(), (4, 3));
    }

    #[test]
    fn test_palette_indices_row_major() {
        let mut image = RgbImage::from_pixel(3, 2, Rgb(NORD.color(0)));
        image.put_pixel(1, 0, Rgb(NORD.color(15)));
        image.put_pixel(2, 1, Rgb(NORD.color(8)));
        let canvas = Canvas::new(image, region());

        assert_eq!(canvas.palette_indices(&NORD), Some(vec![0, 15, 0, 0, 0, 8]));
    }

    #[test]
    fn test_palette_indices_rejects_off_palette_pixel() {
        let mut image = RgbImage::from_pixel(3, 2, Rgb(NORD.color(0)));
        image.put_pixel(0, 1, Rgb([1, 2, 3]));
        let canvas = Canvas::new(image, region());

        assert_eq!(canvas.palette_indices(&NORD), None);
    }
}
