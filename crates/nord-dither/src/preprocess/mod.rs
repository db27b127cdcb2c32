//! Resize and composite stage.
//!
//! Turns an arbitrary decoded photo into a full-display canvas:
//!
//! 1. [`fit_region`] picks the uniform fit-inside scale and the centered
//!    placement of the photo
//! 2. [`resize_catmull_rom`] resamples the source to the region size
//! 3. [`compose`] fills the display with the background color and
//!    composites the resized photo at the region's offset
//!
//! The returned [`Region`] is what the ditherer later confines itself to.

mod compose;
mod resize;

pub use compose::compose;
pub use resize::{fit_region, resize_catmull_rom, Region};
