use std::path::PathBuf;

use nord_dither::DitherError;
use thiserror::Error;

/// Failure converting a single file. Logged by the batch driver, which then
/// moves on to the next file.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Encode error: {0}")]
    Encode(#[from] RenderError),

    #[error("Cannot derive an output name from {path}")]
    NoOutputName { path: PathBuf },
}

/// Setup failure that aborts the whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Cannot read input directory {path}: {source}")]
    InputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot list output directory {path}: {source}")]
    ListOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Pixel ({x}, {y}) is not a palette color")]
    OffPalette { x: u32, y: u32 },
}
