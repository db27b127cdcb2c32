//! Floyd-Steinberg error diffusion with uniform noise injection.
//!
//! Noise is added to the value being quantized, and the diffused error is
//! computed from that noisy value. This breaks up the regular "worm"
//! patterns plain Floyd-Steinberg produces on flat areas at the cost of
//! run-to-run reproducibility (unless the random source is seeded).

use image::RgbImage;
use rand::Rng;

use super::{channel_noise, clamp_u8, DitherOptions, WorkBuffer, FLOYD_STEINBERG};
use crate::palette::Palette;
use crate::preprocess::Region;

/// Dither `region` of `canvas` in place to colors of `palette`.
///
/// Pixels outside `region` are left untouched. Three random values are
/// drawn per pixel (R, G, B) in row-major scan order.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use nord_dither::{dither_region, DitherOptions, Region, NORD};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut canvas = RgbImage::from_pixel(8, 8, Rgb([120, 140, 160]));
/// let region = Region { x: 2, y: 2, width: 4, height: 4 };
/// let mut rng = StdRng::seed_from_u64(1);
///
/// dither_region(&mut canvas, region, &NORD, &DitherOptions::new(), &mut rng);
///
/// assert!(NORD.contains(canvas.get_pixel(3, 3).0));
/// assert_eq!(canvas.get_pixel(0, 0).0, [120, 140, 160]);
/// ```
pub fn dither_region<R: Rng + ?Sized>(
    canvas: &mut RgbImage,
    region: Region,
    palette: &Palette,
    options: &DitherOptions,
    rng: &mut R,
) {
    let mut buf = WorkBuffer::from_region(canvas, region);
    let (width, height) = (buf.width(), buf.height());
    let amount = options.noise_amount;

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = buf.get(x, y);

            // Draw order R, G, B is part of the reproducible stream
            let nr = clamp_u8(r as f64 + channel_noise(rng, amount));
            let ng = clamp_u8(g as f64 + channel_noise(rng, amount));
            let nb = clamp_u8(b as f64 + channel_noise(rng, amount));
            let noisy = [nr, ng, nb];

            let quantized = palette.nearest_color(noisy);
            let error = [
                noisy[0] as f64 - quantized[0] as f64,
                noisy[1] as f64 - quantized[1] as f64,
                noisy[2] as f64 - quantized[2] as f64,
            ];

            buf.set(x, y, quantized);
            diffuse_error(&mut buf, x, y, error);
        }
    }

    buf.write_back(canvas, region);
}

/// Spread the quantization `error` of `(x, y)` over its unvisited
/// neighbors, in kernel order. Neighbors outside the buffer are dropped.
fn diffuse_error(buf: &mut WorkBuffer, x: usize, y: usize, error: [f64; 3]) {
    let (width, height) = (buf.width(), buf.height());
    for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
        let nx = x as i64 + dx as i64;
        if nx < 0 || nx as usize >= width {
            continue;
        }
        let ny = y + dy as usize;
        if ny >= height {
            continue;
        }
        buf.diffuse(nx as usize, ny, error, weight, FLOYD_STEINBERG.divisor);
    }
}
