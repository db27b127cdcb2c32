//! Noisy Floyd-Steinberg error diffusion, confined to the photo region.
//!
//! # Algorithm
//!
//! The region is scanned row-major, left to right, top to bottom. For each
//! pixel:
//!
//! 1. read the accumulated value from the [`WorkBuffer`]
//! 2. add independent uniform noise to R, G and B (in that order)
//! 3. snap to the nearest palette color
//! 4. store the palette color and diffuse `noisy - quantized` to the four
//!    Floyd-Steinberg neighbors that lie inside the region
//!
//! Every accumulation is clamped to `0..=255` as soon as it is written, not
//! at the end of the pass. Near saturation this changes the result, so the
//! buffer stores bytes rather than unbounded floats.
//!
//! Pixels outside the region are never read or written.

mod floyd_steinberg_noise;
mod kernel;
mod noise;
mod options;

pub use floyd_steinberg_noise::dither_region;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use noise::channel_noise;
pub use options::{DitherOptions, DEFAULT_NOISE_AMOUNT};

use image::{Rgb, RgbImage};

use crate::preprocess::Region;

/// Clamp to `0..=255` and truncate toward zero.
#[inline]
pub(crate) fn clamp_u8(value: f64) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

/// Region-sized accumulator for the dithering pass.
///
/// Allocated fresh for every call and dropped at the end of it; it holds
/// the pre-dither region pixels, the running diffused error and, once a
/// pixel has been visited, its final palette color.
#[derive(Debug)]
pub struct WorkBuffer {
    pixels: Vec<[u8; 3]>,
    width: usize,
    height: usize,
}

impl WorkBuffer {
    /// Copy the `region` of `canvas` into a new buffer.
    pub fn from_region(canvas: &RgbImage, region: Region) -> Self {
        let width = region.width as usize;
        let height = region.height as usize;
        let mut pixels = Vec::with_capacity(region.area());
        for y in 0..region.height {
            for x in 0..region.width {
                pixels.push(canvas.get_pixel(region.x + x, region.y + y).0);
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Current value at local coordinate `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        self.pixels[y * self.width + x] = rgb;
    }

    /// Add `error * weight / divisor` to `(x, y)`, clamping each channel
    /// immediately.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn diffuse(&mut self, x: usize, y: usize, error: [f64; 3], weight: u8, divisor: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let px = &mut self.pixels[y * self.width + x];
        for c in 0..3 {
            px[c] = clamp_u8(px[c] as f64 + error[c] * weight as f64 / divisor as f64);
        }
    }

    /// Copy every buffered pixel back onto `canvas` at the region's offset.
    pub fn write_back(&self, canvas: &mut RgbImage, region: Region) {
        for y in 0..self.height {
            for x in 0..self.width {
                canvas.put_pixel(
                    region.x + x as u32,
                    region.y + y as u32,
                    Rgb(self.get(x, y)),
                );
            }
        }
    }
}
