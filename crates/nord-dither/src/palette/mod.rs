//! Palette types and nearest-color matching
//!
//! This module provides the fixed Nord palette and the color matcher used by
//! the ditherer and the PNG encoder.

mod palette;

pub use palette::{Palette, Swatch, Tone, NORD, NORD_SWATCHES};
