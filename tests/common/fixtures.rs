//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use nordframe::models::AppConfig;
use tempfile::TempDir;

/// Small panel used by most tests so conversions stay fast
pub mod display {
    pub const WIDTH: u32 = 64;
    pub const HEIGHT: u32 = 48;
}

/// Scratch input/output directories that disappear with the value.
pub struct TestDirs {
    _root: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TestDirs {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let input = root.path().join("input");
        let output = root.path().join("output");
        std::fs::create_dir_all(&input).expect("create input dir");
        Self {
            _root: root,
            input,
            output,
        }
    }

    /// Config pointing at these directories, small display, fixed seed.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            input_dir: self.input.clone(),
            output_dir: self.output.clone(),
            width: display::WIDTH,
            height: display::HEIGHT,
            seed: Some(1),
            ..AppConfig::default()
        }
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output.join(name)
    }
}

/// Gradient photo with enough structure to exercise resizing and dithering.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
        ])
    })
}

pub fn write_jpeg(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image
        .save_with_format(&path, ImageFormat::Jpeg)
        .expect("write jpeg fixture");
    path
}

pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image
        .save_with_format(&path, ImageFormat::Png)
        .expect("write png fixture");
    path
}

/// RGBA PNG, left half fully transparent, right half opaque `rgb`.
pub fn write_half_transparent_png(dir: &Path, name: &str, size: u32, rgb: [u8; 3]) -> PathBuf {
    let image = RgbaImage::from_fn(size, size, |x, _| {
        if x < size / 2 {
            Rgba([255, 255, 255, 0])
        } else {
            Rgba([rgb[0], rgb[1], rgb[2], 255])
        }
    });
    let path = dir.join(name);
    image
        .save_with_format(&path, ImageFormat::Png)
        .expect("write rgba fixture");
    path
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture bytes");
    path
}
