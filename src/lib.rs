//! nordframe
//!
//! Batch converter turning photos into Nord-palette dithered frames for the
//! Framework 13 panel. The image pipeline lives in the `nord-dither` crate;
//! this library adds configuration, file handling and PNG output, and is
//! exposed for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
