//! Dithering options and configuration.

/// Default noise amplitude as a fraction of the full 0-255 channel range.
pub const DEFAULT_NOISE_AMOUNT: f64 = 0.05;

/// Configuration options for the noisy Floyd-Steinberg pass.
///
/// # Example
///
/// ```
/// use nord_dither::DitherOptions;
///
/// // Defaults: 5% noise amplitude
/// let options = DitherOptions::new();
///
/// // Deterministic output regardless of the random source
/// let options = DitherOptions::new().noise_amount(0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DitherOptions {
    /// Peak-to-peak noise amplitude per channel, as a fraction of 255.
    ///
    /// Each channel receives `(u - 0.5) * 255 * noise_amount` with `u`
    /// drawn uniformly from `[0, 1)`. Zero disables noise.
    ///
    /// Default: `0.05`
    pub noise_amount: f64,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            noise_amount: DEFAULT_NOISE_AMOUNT,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the noise amplitude.
    #[inline]
    pub fn noise_amount(mut self, amount: f64) -> Self {
        self.noise_amount = amount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = DitherOptions::default();
        assert!(
            (opts.noise_amount - 0.05).abs() < f64::EPSILON,
            "noise_amount should default to 0.05"
        );
    }

    #[test]
    fn test_builder_noise_amount() {
        let opts = DitherOptions::new().noise_amount(0.0);
        assert_eq!(opts.noise_amount, 0.0);
    }
}
