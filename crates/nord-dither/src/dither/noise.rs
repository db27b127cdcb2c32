//! Uniform noise injected before palette snapping.
//!
//! The random source is a caller-supplied [`rand::Rng`], never a global
//! generator, so tests and reproducible batch runs can seed it.

use rand::Rng;

/// Draw one channel's noise offset: `(u - 0.5) * 255 * amount`, `u ~ U[0, 1)`.
///
/// A value is consumed from `rng` even when `amount` is zero, so the random
/// stream advances identically regardless of the amplitude.
#[inline]
pub fn channel_noise<R: Rng + ?Sized>(rng: &mut R, amount: f64) -> f64 {
    let u: f64 = rng.gen();
    (u - 0.5) * 255.0 * amount
}
