//! Single-file conversion, as used by `nordframe render`.

mod common;

use common::fixtures::{self, display, gradient};
use common::TestDirs;
use nord_dither::{DisplaySpec, FrameDitherer};
use nordframe::error::ConvertError;
use nordframe::services::convert_file;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_ditherer() -> FrameDitherer {
    FrameDitherer::new(DisplaySpec::new(display::WIDTH, display::HEIGHT))
}

#[test]
fn test_render_writes_frame() {
    let dirs = TestDirs::new();
    let input = fixtures::write_jpeg(&dirs.input, "in.jpg", &gradient(64, 64));
    let output = dirs.input.join("out.png");

    let written = convert_file(
        &small_ditherer(),
        &input,
        &output,
        false,
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();

    assert_eq!(written as u64, std::fs::metadata(&output).unwrap().len());
    common::assert_nord_frame(&output, display::WIDTH, display::HEIGHT);
}

#[test]
fn test_render_overwrites_existing_output() {
    let dirs = TestDirs::new();
    let input = fixtures::write_png(&dirs.input, "in.png", &gradient(16, 16));
    let output = dirs.input.join("out.png");
    std::fs::write(&output, b"stale").unwrap();

    convert_file(
        &small_ditherer(),
        &input,
        &output,
        false,
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap();

    common::assert_nord_frame(&output, display::WIDTH, display::HEIGHT);
}

#[test]
fn test_render_missing_input_is_io_error() {
    let dirs = TestDirs::new();
    let output = dirs.input.join("out.png");

    let err = convert_file(
        &small_ditherer(),
        &dirs.input.join("nope.jpg"),
        &output,
        false,
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Io { .. }), "got {err:?}");
    assert!(!output.exists());
}

#[test]
fn test_render_decode_failure_writes_nothing() {
    let dirs = TestDirs::new();
    let input = fixtures::write_bytes(&dirs.input, "fake.png", b"\x89PNG\r\n\x1a\ntruncated");
    let output = dirs.input.join("out.png");

    let err = convert_file(
        &small_ditherer(),
        &input,
        &output,
        false,
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Decode(_)), "got {err:?}");
    assert!(!output.exists());
}

#[test]
fn test_render_invalid_noise_is_dither_error() {
    let dirs = TestDirs::new();
    let input = fixtures::write_png(&dirs.input, "in.png", &gradient(8, 8));
    let output = dirs.input.join("out.png");

    let err = convert_file(
        &small_ditherer().noise_amount(-1.0),
        &input,
        &output,
        false,
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Dither(_)), "got {err:?}");
    assert!(!output.exists());
}

#[test]
fn test_optimized_png_has_same_pixels() {
    let dirs = TestDirs::new();
    let input = fixtures::write_png(&dirs.input, "in.png", &gradient(50, 30));
    let plain = dirs.input.join("plain.png");
    let optimized = dirs.input.join("optimized.png");

    convert_file(
        &small_ditherer(),
        &input,
        &plain,
        false,
        &mut StdRng::seed_from_u64(8),
    )
    .unwrap();
    convert_file(
        &small_ditherer(),
        &input,
        &optimized,
        true,
        &mut StdRng::seed_from_u64(8),
    )
    .unwrap();

    let a = common::read_png(&plain);
    let b = common::read_png(&optimized);
    assert!(a == b, "oxipng changed the decoded pixels");
}
