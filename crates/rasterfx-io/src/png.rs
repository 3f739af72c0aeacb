//! PNG format support.
//!
//! Reads 8- and 16-bit PNG files, normalizing grayscale, alpha, and deep
//! variants onto the crate's three-channel 8-bit-range buffer. Writes always
//! produce 8-bit RGB with an sRGB chunk. PNG is lossless, so in-range
//! integer samples round trip exactly.
//!
//! # Example
//!
//! ```rust,ignore
//! use rasterfx_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rasterfx_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::convert::{from_rgb8, to_rgb8};
use crate::{IoError, IoResult};

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let (width, height) = (info.width, info.height);
    debug!(width, height, color_type = ?info.color_type, "decoded png");
    let pixels = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => pixels.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => pixels
            .chunks(4)
            .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
            .collect(),
        // 16-bit samples arrive big-endian; the high byte carries the
        // displayable range.
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            pixels.chunks(2).map(|pair| pair[0]).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => pixels
            .chunks(8)
            .flat_map(|rgba| [rgba[0], rgba[2], rgba[4]])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            pixels.iter().flat_map(|&g| [g, g, g]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => pixels
            .chunks(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{color_type:?} {bit_depth:?}"
            )));
        }
    };

    from_rgb8(height, width, &rgb)
}

/// Writes an image to an 8-bit RGB PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&to_rgb8(image))
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(height: u32, width: u32) -> Image {
        let mut image = Image::new(height, width);
        for row in 0..height {
            for col in 0..width {
                image.set_pixel(
                    row,
                    col,
                    [((row * 8) % 256) as f32, ((col * 8) % 256) as f32, 128.0],
                );
            }
        }
        image
    }

    #[test]
    fn test_roundtrip_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");
        let image = test_image(24, 32);

        write(&path, &image).expect("Failed to write PNG");
        let loaded = read(&path).expect("Failed to read PNG");

        assert_eq!(loaded.dimensions(), (24, 32));
        assert_eq!(loaded.data(), image.data());
    }

    #[test]
    fn test_write_clamps_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clamped.png");
        let mut image = Image::new(1, 2);
        image.set_pixel(0, 0, [-50.0, 300.0, 127.6]);
        image.set_pixel(0, 1, [0.0, 255.0, 127.4]);

        write(&path, &image).expect("Failed to write PNG");
        let loaded = read(&path).expect("Failed to read PNG");

        assert_eq!(loaded.pixel(0, 0), [0.0, 255.0, 128.0]);
        assert_eq!(loaded.pixel(0, 1), [0.0, 255.0, 127.0]);
    }

    #[test]
    fn test_grayscale_reads_as_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = png::Encoder::new(BufWriter::new(file), 4, 2);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[0, 64, 128, 255, 10, 20, 30, 40])
                .unwrap();
        }

        let image = read(&path).expect("Failed to read PNG");
        assert_eq!(image.dimensions(), (2, 4));
        assert_eq!(image.pixel(0, 1), [64.0, 64.0, 64.0]);
        assert_eq!(image.pixel(1, 3), [40.0, 40.0, 40.0]);
    }

    #[test]
    fn test_sixteen_bit_rgb_takes_high_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 1);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[
                    0x12, 0x34, 0x00, 0xFF, 0xFF, 0x00, // pixel (0, 0)
                    0x80, 0x00, 0x00, 0x01, 0xFF, 0xFF, // pixel (0, 1)
                ])
                .unwrap();
        }

        let image = read(&path).expect("Failed to read PNG");
        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.pixel(0, 0), [0x12 as f32, 0.0, 255.0]);
        assert_eq!(image.pixel(0, 1), [128.0, 0.0, 255.0]);
    }

    #[test]
    fn test_missing_file_fails() {
        let err = read("/nonexistent/nothing.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
