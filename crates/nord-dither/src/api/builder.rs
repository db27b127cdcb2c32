//! FrameDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`FrameDitherer`] wraps layout, resize, compositing and dithering behind
//! fluent configuration with the Framework 13 defaults.

use image::{DynamicImage, RgbaImage};
use rand::Rng;

use super::DitherError;
use crate::display::DisplaySpec;
use crate::dither::{dither_region, DitherOptions, DEFAULT_NOISE_AMOUNT};
use crate::output::Canvas;
use crate::palette::{Palette, NORD};
use crate::preprocess::{compose, fit_region, resize_catmull_rom, Region};

/// Fraction of each display dimension the photo may occupy by default.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.5;

/// High-level builder turning photos into dithered Nord frames.
///
/// - Constructor takes the target [`DisplaySpec`]; the palette is always
///   [`NORD`]
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one builder serves a
///   whole batch
/// - Options are validated when work is requested, before any pixel is
///   touched
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgb, RgbImage};
/// use nord_dither::{DisplaySpec, FrameDitherer};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let ditherer = FrameDitherer::new(DisplaySpec::new(120, 80))
///     .scale_factor(0.5)
///     .noise_amount(0.0);
///
/// let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(90, 30, Rgb([10, 200, 30])));
/// let canvas = ditherer.dither(&photo, &mut StdRng::seed_from_u64(0)).unwrap();
///
/// // 60x40 box, width-limited: 60x20 centered
/// let region = canvas.region();
/// assert_eq!((region.x, region.y, region.width, region.height), (30, 30, 60, 20));
/// ```
#[derive(Debug, Clone)]
pub struct FrameDitherer {
    display: DisplaySpec,
    palette: Palette,
    scale_factor: f64,
    dither_opts: DitherOptions,
}

impl Default for FrameDitherer {
    fn default() -> Self {
        Self::new(DisplaySpec::FRAMEWORK_13)
    }
}

impl FrameDitherer {
    /// Create a ditherer for `display` with scale factor 0.5 and 5% noise.
    pub fn new(display: DisplaySpec) -> Self {
        Self {
            display,
            palette: NORD,
            scale_factor: DEFAULT_SCALE_FACTOR,
            dither_opts: DitherOptions::new().noise_amount(DEFAULT_NOISE_AMOUNT),
        }
    }

    /// Set the fraction of each display dimension the photo may occupy.
    ///
    /// Must lie in `(0, 1]`.
    #[inline]
    pub fn scale_factor(mut self, factor: f64) -> Self {
        self.scale_factor = factor;
        self
    }

    /// Set the noise amplitude. Must be finite and non-negative.
    #[inline]
    pub fn noise_amount(mut self, amount: f64) -> Self {
        self.dither_opts = self.dither_opts.noise_amount(amount);
        self
    }

    #[inline]
    pub fn display(&self) -> DisplaySpec {
        self.display
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Placement of a `src_width x src_height` photo on the display.
    pub fn layout(&self, src_width: u32, src_height: u32) -> Result<Region, DitherError> {
        fit_region(src_width, src_height, self.display, self.scale_factor)
    }

    /// Resize `image` and composite it onto a background-filled canvas,
    /// without dithering.
    pub fn compose(&self, image: &DynamicImage) -> Result<Canvas, DitherError> {
        self.validate()?;
        self.compose_rgba(&image.to_rgba8())
    }

    /// Run the full pipeline: layout, resize, compose and dither the photo
    /// region.
    ///
    /// Consumes `3 * region.width * region.height` values from `rng`.
    pub fn dither<R: Rng + ?Sized>(
        &self,
        image: &DynamicImage,
        rng: &mut R,
    ) -> Result<Canvas, DitherError> {
        self.validate()?;
        let mut canvas = self.compose_rgba(&image.to_rgba8())?;
        let region = canvas.region();
        dither_region(
            canvas.as_rgb_image_mut(),
            region,
            &self.palette,
            &self.dither_opts,
            rng,
        );
        Ok(canvas)
    }

    fn compose_rgba(&self, photo: &RgbaImage) -> Result<Canvas, DitherError> {
        let region = self.layout(photo.width(), photo.height())?;
        let resized = resize_catmull_rom(photo, region.width, region.height);
        let image = compose(&resized, self.display, region, self.palette.background());
        Ok(Canvas::new(image, region))
    }

    fn validate(&self) -> Result<(), DitherError> {
        let noise = self.dither_opts.noise_amount;
        if !noise.is_finite() || noise < 0.0 {
            return Err(DitherError::InvalidOption {
                name: "noise_amount",
                value: noise,
            });
        }
        Ok(())
    }
}

/// Convert `image` into a dithered Framework 13 frame with the default
/// options.
///
/// Equivalent to `FrameDitherer::default().dither(image, rng)`.
pub fn dither_image<R: Rng + ?Sized>(
    image: &DynamicImage,
    rng: &mut R,
) -> Result<Canvas, DitherError> {
    FrameDitherer::default().dither(image, rng)
}
