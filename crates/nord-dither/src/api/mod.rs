//! Public API for the nord-dither crate.
//!
//! This module provides the high-level API: the [`FrameDitherer`] builder,
//! the [`dither_image`] shortcut and the [`DitherError`] error type.

mod builder;
mod error;

pub use builder::{dither_image, FrameDitherer, DEFAULT_SCALE_FACTOR};
pub use error::DitherError;
