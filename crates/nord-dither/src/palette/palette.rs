//! The fixed Nord palette and nearest-color matching.
//!
//! The palette is a process-wide constant: sixteen sRGB swatches in a fixed
//! order. Matching is a linear scan under squared Euclidean RGB distance.

/// Tonal family of a Nord swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Dark background tones (nord0-nord3).
    PolarNight,
    /// Light foreground tones (nord4-nord6).
    SnowStorm,
    /// Frosty blue accents (nord7-nord10).
    Frost,
    /// Colorful accents (nord11-nord15).
    Aurora,
}

/// A single named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Canonical Nord name (`nord0` .. `nord15`).
    pub name: &'static str,
    /// sRGB bytes.
    pub rgb: [u8; 3],
    /// Tonal family.
    pub tone: Tone,
}

const fn swatch(name: &'static str, r: u8, g: u8, b: u8, tone: Tone) -> Swatch {
    Swatch {
        name,
        rgb: [r, g, b],
        tone,
    }
}

/// The sixteen Nord swatches in enumeration order.
///
/// Order matters: ties in [`Palette::find_nearest`] resolve to the earliest
/// entry, and the first Polar Night entry is the canvas background.
pub const NORD_SWATCHES: [Swatch; 16] = [
    swatch("nord0", 46, 52, 64, Tone::PolarNight),
    swatch("nord1", 59, 66, 82, Tone::PolarNight),
    swatch("nord2", 67, 76, 94, Tone::PolarNight),
    swatch("nord3", 76, 86, 106, Tone::PolarNight),
    swatch("nord4", 216, 222, 233, Tone::SnowStorm),
    swatch("nord5", 229, 233, 240, Tone::SnowStorm),
    swatch("nord6", 236, 239, 244, Tone::SnowStorm),
    swatch("nord7", 143, 188, 187, Tone::Frost),
    swatch("nord8", 136, 192, 208, Tone::Frost),
    swatch("nord9", 129, 161, 193, Tone::Frost),
    swatch("nord10", 94, 129, 172, Tone::Frost),
    swatch("nord11", 191, 97, 106, Tone::Aurora),
    swatch("nord12", 208, 135, 112, Tone::Aurora),
    swatch("nord13", 235, 203, 139, Tone::Aurora),
    swatch("nord14", 163, 190, 140, Tone::Aurora),
    swatch("nord15", 180, 142, 173, Tone::Aurora),
];

/// The process-wide Nord palette.
pub static NORD: Palette = Palette::from_swatches(&NORD_SWATCHES);

/// An immutable, ordered color palette.
///
/// There is exactly one instance, [`NORD`]; the type exists so that the
/// matcher, compositor and encoder can share one vocabulary for palette
/// lookups.
///
/// # Example
///
/// ```
/// use nord_dither::NORD;
///
/// assert_eq!(NORD.len(), 16);
/// assert_eq!(NORD.background(), [46, 52, 64]);
///
/// // A palette entry always matches itself
/// let (idx, dist) = NORD.find_nearest([94, 129, 172]);
/// assert_eq!(idx, 10);
/// assert_eq!(dist, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    swatches: &'static [Swatch],
}

impl Palette {
    pub(crate) const fn from_swatches(swatches: &'static [Swatch]) -> Self {
        Self { swatches }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// RGB bytes of the entry at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> [u8; 3] {
        self.swatches[idx].rgb
    }

    /// Full swatch at `idx`.
    #[inline]
    pub fn swatch(&self, idx: usize) -> &Swatch {
        &self.swatches[idx]
    }

    /// Iterate over all swatches in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// The designated background color: the first Polar Night entry.
    pub fn background(&self) -> [u8; 3] {
        self.swatches
            .iter()
            .find(|s| s.tone == Tone::PolarNight)
            .unwrap_or(&self.swatches[0])
            .rgb
    }

    /// Find the entry closest to `rgb` under squared Euclidean distance.
    ///
    /// Returns `(index, squared_distance)`. Comparison is strict, so when two
    /// entries are equally close the one enumerated first wins.
    pub fn find_nearest(&self, rgb: [u8; 3]) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, swatch) in self.swatches.iter().enumerate() {
            let dist = squared_distance(rgb, swatch.rgb);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// RGB bytes of the entry closest to `rgb`.
    #[inline]
    pub fn nearest_color(&self, rgb: [u8; 3]) -> [u8; 3] {
        self.color(self.find_nearest(rgb).0)
    }

    /// Exact lookup: index of the entry whose bytes equal `rgb`.
    pub fn index_of(&self, rgb: [u8; 3]) -> Option<usize> {
        self.swatches.iter().position(|s| s.rgb == rgb)
    }

    /// Returns true if `rgb` is exactly one of the palette entries.
    #[inline]
    pub fn contains(&self, rgb: [u8; 3]) -> bool {
        self.index_of(rgb).is_some()
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, suitable for a PNG PLTE chunk.
    pub fn to_plte(&self) -> Vec<u8> {
        self.swatches.iter().flat_map(|s| s.rgb).collect()
    }
}

#[inline]
fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}
