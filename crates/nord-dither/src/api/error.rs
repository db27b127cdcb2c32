//! Unified error type for the nord-dither public API.

use thiserror::Error;

/// Errors raised before any resize or dithering work starts.
///
/// The pipeline itself cannot fail once a layout has been computed; every
/// variant here describes an input that would otherwise divide by zero or
/// produce an empty photo region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// Source image has a zero dimension.
    #[error("source image has degenerate dimensions {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    /// Display and scale factor leave no room for a photo.
    #[error("display {width}x{height} leaves no photo area at scale factor {scale_factor}")]
    DegenerateDisplay {
        width: u32,
        height: u32,
        scale_factor: f64,
    },

    /// The fitted photo collapses to zero pixels on one axis.
    #[error("source {src_width}x{src_height} collapses to {width}x{height} when fitted")]
    DegenerateFit {
        src_width: u32,
        src_height: u32,
        width: u32,
        height: u32,
    },

    /// A builder option is out of range.
    #[error("invalid option {name}: {value}")]
    InvalidOption { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_message() {
        let error = DitherError::EmptySource {
            width: 0,
            height: 300,
        };
        assert_eq!(
            error.to_string(),
            "source image has degenerate dimensions 0x300"
        );
    }

    #[test]
    fn test_degenerate_fit_message() {
        let error = DitherError::DegenerateFit {
            src_width: 1,
            src_height: 10_000,
            width: 0,
            height: 752,
        };
        assert_eq!(
            error.to_string(),
            "source 1x10000 collapses to 0x752 when fitted"
        );
    }

    #[test]
    fn test_invalid_option_message() {
        let error = DitherError::InvalidOption {
            name: "noise_amount",
            value: -1.0,
        };
        assert_eq!(error.to_string(), "invalid option noise_amount: -1");
    }
}
