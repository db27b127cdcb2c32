//! Fit-inside layout and Catmull-Rom resampling.
//!
//! The photo is scaled uniformly so it fits inside a box that is a fixed
//! fraction of the display, then centered. The limiting axis is decided with
//! integer cross-multiplication so it always receives exactly the available
//! size; the other axis is floored.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::api::DitherError;
use crate::display::DisplaySpec;

/// Placement of the resized photo on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left border width.
    pub x: u32,
    /// Top border height.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Returns true if canvas pixel `(x, y)` lies inside the photo.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Number of pixels covered by the photo.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Compute where a `src_width x src_height` photo lands on `display`.
///
/// # Errors
///
/// - [`DitherError::EmptySource`] if either source dimension is zero
/// - [`DitherError::InvalidOption`] if `scale_factor` is not in `(0, 1]`
/// - [`DitherError::DegenerateDisplay`] if the available box is empty
/// - [`DitherError::DegenerateFit`] if the scaled photo would be zero pixels
///   wide or tall (extreme aspect ratios)
///
/// # Example
///
/// ```
/// use nord_dither::{fit_region, DisplaySpec};
///
/// let region = fit_region(4000, 3000, DisplaySpec::FRAMEWORK_13, 0.5).unwrap();
/// assert_eq!((region.width, region.height), (1002, 752));
/// assert_eq!((region.x, region.y), (627, 376));
/// ```
pub fn fit_region(
    src_width: u32,
    src_height: u32,
    display: DisplaySpec,
    scale_factor: f64,
) -> Result<Region, DitherError> {
    if src_width == 0 || src_height == 0 {
        return Err(DitherError::EmptySource {
            width: src_width,
            height: src_height,
        });
    }
    if !(scale_factor > 0.0 && scale_factor <= 1.0) {
        return Err(DitherError::InvalidOption {
            name: "scale_factor",
            value: scale_factor,
        });
    }

    let (avail_w, avail_h) = display.available_box(scale_factor);
    if avail_w == 0 || avail_h == 0 {
        return Err(DitherError::DegenerateDisplay {
            width: display.width,
            height: display.height,
            scale_factor,
        });
    }

    let (sw, sh) = (src_width as u64, src_height as u64);
    let (aw, ah) = (avail_w as u64, avail_h as u64);

    // aw/sw <= ah/sh  <=>  aw*sh <= ah*sw; ties go to the width axis
    let (width, height) = if aw * sh <= ah * sw {
        (avail_w, (sh * aw / sw) as u32)
    } else {
        ((sw * ah / sh) as u32, avail_h)
    };

    if width == 0 || height == 0 {
        return Err(DitherError::DegenerateFit {
            src_width,
            src_height,
            width,
            height,
        });
    }

    Ok(Region {
        x: (display.width - width) / 2,
        y: (display.height - height) / 2,
        width,
        height,
    })
}

/// Resample `src` to exactly `width x height` with the Catmull-Rom cubic filter.
///
/// Images with any translucency are filtered in premultiplied form, so the
/// color stored under fully transparent pixels never bleeds into edges.
pub fn resize_catmull_rom(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.pixels().all(|p| p.0[3] == u8::MAX) {
        return imageops::resize(src, width, height, FilterType::CatmullRom);
    }

    let premultiplied = Rgba32FImage::from_fn(src.width(), src.height(), |x, y| {
        let [r, g, b, a] = src.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * alpha,
            g as f32 / 255.0 * alpha,
            b as f32 / 255.0 * alpha,
            alpha,
        ])
    });
    let resized = imageops::resize(&premultiplied, width, height, FilterType::CatmullRom);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([
            unit_to_u8(r / a),
            unit_to_u8(g / a),
            unit_to_u8(b / a),
            unit_to_u8(a),
        ])
    })
}

fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
