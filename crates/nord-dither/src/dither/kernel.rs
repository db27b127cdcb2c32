//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry is a `(dx, dy, weight)` offset to a pixel that has not been
/// finalized yet; the neighbor receives `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries, applied in order.
    pub entries: &'static [(i32, u32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
