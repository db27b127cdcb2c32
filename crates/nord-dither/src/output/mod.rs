//! Output types for the pipeline.
//!
//! [`Canvas`] is the display-sized frame handed to encoders. It keeps the
//! photo [`Region`](crate::preprocess::Region) alongside the pixels, and can
//! be turned into palette indices for indexed image formats.

mod canvas;

pub use canvas::Canvas;
