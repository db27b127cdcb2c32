//! Target panel geometry.

/// Pixel dimensions of the panel the canvas is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// Framework 13 laptop panel: 2256x1504
    pub const FRAMEWORK_13: Self = Self {
        width: 2256,
        height: 1504,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Box available to the photo: each dimension scaled by `scale_factor`,
    /// floored.
    pub fn available_box(&self, scale_factor: f64) -> (u32, u32) {
        (
            (self.width as f64 * scale_factor).floor() as u32,
            (self.height as f64 * scale_factor).floor() as u32,
        )
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::FRAMEWORK_13
    }
}
