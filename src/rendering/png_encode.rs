//! Indexed PNG output for dithered canvases.
//!
//! A finished canvas only contains the 16 palette colors, so it is written
//! as a 4-bit indexed PNG with the palette in PLTE. Decoders expand it back
//! to exactly the palette's RGB bytes.

use std::io::Cursor;

use nord_dither::{Canvas, Palette};

use crate::error::RenderError;

/// Encode `canvas` as an indexed PNG whose PLTE is `palette`.
///
/// With `optimize` the image is re-compressed with oxipng; if that fails
/// the plain encoding is returned.
///
/// # Errors
///
/// [`RenderError::OffPalette`] if the canvas has not been dithered (some
/// pixel is not a palette entry), [`RenderError::PngEncode`] if the PNG
/// writer fails.
pub fn encode_canvas(
    canvas: &Canvas,
    palette: &Palette,
    optimize: bool,
) -> Result<Vec<u8>, RenderError> {
    let indices = match canvas.palette_indices(palette) {
        Some(indices) => indices,
        None => return Err(first_off_palette(canvas, palette)),
    };

    let bits = bit_depth_for(palette.len());
    let depth = match bits {
        1 => png::BitDepth::One,
        2 => png::BitDepth::Two,
        4 => png::BitDepth::Four,
        _ => png::BitDepth::Eight,
    };
    let packed = if bits == 8 {
        indices
    } else {
        pack_nbits(&indices, canvas.width(), bits)
    };

    let plte = palette.to_plte();
    let compression = if optimize {
        // oxipng will re-compress optimally
        png::Compression::Fast
    } else {
        png::Compression::Default
    };
    let png_bytes = encode_png(
        canvas.width(),
        canvas.height(),
        depth,
        &plte,
        &packed,
        compression,
    )?;

    if !optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::debug!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

/// Smallest PNG bit depth that can index `colors` entries.
fn bit_depth_for(colors: usize) -> u8 {
    match colors {
        0..=2 => 1,
        3..=4 => 2,
        5..=16 => 4,
        _ => 8,
    }
}

fn first_off_palette(canvas: &Canvas, palette: &Palette) -> RenderError {
    canvas
        .as_rgb_image()
        .enumerate_pixels()
        .find(|(_, _, p)| !palette.contains(p.0))
        .map(|(x, y, _)| RenderError::OffPalette { x, y })
        .unwrap_or_else(|| RenderError::PngEncode("canvas is not palette-indexable".to_string()))
}

fn encode_png(
    width: u32,
    height: u32,
    bit_depth: png::BitDepth,
    plte: &[u8],
    packed: &[u8],
    compression: png::Compression,
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(compression);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Rows are padded to a whole byte.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use nord_dither::{DisplaySpec, FrameDitherer, Region, NORD};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dithered_canvas() -> Canvas {
        let photo = DynamicImage::ImageRgb8(RgbImage::from_fn(30, 20, |x, y| {
            Rgb([(x * 8) as u8, (y * 12) as u8, 140])
        }));
        FrameDitherer::new(DisplaySpec::new(41, 27))
            .dither(&photo, &mut StdRng::seed_from_u64(4))
            .unwrap()
    }

    #[test]
    fn test_pack_4bit_pads_odd_rows() {
        // 3 pixels per row -> 2 bytes per row
        let packed = pack_nbits(&[1, 2, 3, 15, 0, 7], 3, 4);
        assert_eq!(packed, vec![0x12, 0x30, 0xF0, 0x70]);
    }

    #[test]
    fn test_pack_2bit() {
        let packed = pack_nbits(&[0, 1, 2, 3, 3], 5, 2);
        assert_eq!(packed, vec![0b00_01_10_11, 0b11_00_00_00]);
    }

    #[test]
    fn test_sixteen_colors_use_four_bits() {
        assert_eq!(bit_depth_for(NORD.len()), 4);
        assert_eq!(bit_depth_for(2), 1);
        assert_eq!(bit_depth_for(17), 8);
    }

    #[test]
    fn test_encoded_png_decodes_to_canvas_pixels() {
        let canvas = dithered_canvas();
        let bytes = encode_canvas(&canvas, &NORD, false).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (41, 27));
        assert!(
            decoded == *canvas.as_rgb_image(),
            "decoded PNG differs from the canvas"
        );
    }

    #[test]
    fn test_png_header_is_indexed_4bit_with_16_entry_plte() {
        let bytes = encode_canvas(&dithered_canvas(), &NORD, false).unwrap();

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::Four);
        let plte = info.palette.as_ref().unwrap();
        assert_eq!(plte.len(), 16 * 3);
        assert_eq!(&plte[..3], &[46, 52, 64]);
        assert_eq!(&plte[45..], &[180, 142, 173]);
    }

    #[test]
    fn test_optimized_output_still_decodes_identically() {
        let canvas = dithered_canvas();
        let bytes = encode_canvas(&canvas, &NORD, true).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert!(decoded == *canvas.as_rgb_image());
    }

    #[test]
    fn test_undithered_canvas_rejected() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb(NORD.background()));
        image.put_pixel(2, 1, Rgb([1, 2, 3]));
        let canvas = Canvas::new(
            image,
            Region {
                x: 1,
                y: 1,
                width: 2,
                height: 2,
            },
        );

        match encode_canvas(&canvas, &NORD, false) {
            Err(RenderError::OffPalette { x, y }) => assert_eq!((x, y), (2, 1)),
            other => panic!("expected OffPalette, got {other:?}"),
        }
    }
}
