#![allow(clippy::module_inception)]

//! nord-dither: photo frames for a 16-color Nord palette
//!
//! Turns an arbitrary photo into a display-sized frame whose every pixel is
//! one of the 16 Nord colors. The photo is shrunk (or grown) to fit inside
//! half of the display, centered on a `nord0` background, and only the photo
//! area is dithered.
//!
//! # Quick Start
//!
//! ```
//! use image::{DynamicImage, Rgb, RgbImage};
//! use nord_dither::{dither_image, NORD};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(400, 300, Rgb([128, 128, 128])));
//! let canvas = dither_image(&photo, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! assert_eq!((canvas.width(), canvas.height()), (2256, 1504));
//! assert!(canvas.palette_indices(&NORD).is_some());
//! ```
//!
//! # Pipeline
//!
//! ```text
//! DynamicImage (any size, any color type)
//!     |
//!     v
//! fit_region        uniform fit-inside scale, centered placement
//!     |
//!     v
//! resize            Catmull-Rom to the region size
//!     |
//!     v
//! compose           nord0 background + source-over paste
//!     |
//!     v
//! dither_region     noisy Floyd-Steinberg, region only
//!     |
//!     v
//! Canvas            display-sized, palette colors only
//! ```
//!
//! # Color Matching
//!
//! Nearest color is plain squared Euclidean distance in sRGB bytes. Ties go
//! to the entry enumerated first. The palette is small enough that a linear
//! scan over 16 entries beats any acceleration structure.
//!
//! # Randomness
//!
//! Every entry point that dithers takes a caller-supplied [`rand::Rng`].
//! Seed it (e.g. `StdRng::seed_from_u64`) for byte-identical output across
//! runs; with a noise amount of zero the output does not depend on the
//! generator at all.

pub mod api;
pub mod display;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{dither_image, DitherError, FrameDitherer, DEFAULT_SCALE_FACTOR};
pub use display::DisplaySpec;
pub use dither::{
    channel_noise, dither_region, DitherOptions, Kernel, WorkBuffer, DEFAULT_NOISE_AMOUNT,
    FLOYD_STEINBERG,
};
pub use output::Canvas;
pub use palette::{Palette, Swatch, Tone, NORD, NORD_SWATCHES};
pub use preprocess::{compose, fit_region, resize_catmull_rom, Region};
