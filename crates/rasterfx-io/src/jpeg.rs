//! JPEG format support.
//!
//! Reads baseline and progressive JPEG files, normalizing grayscale and CMYK
//! inputs to RGB, and writes 8-bit RGB at a configurable quality. JPEG is
//! lossy, so round trips are close but not exact.
//!
//! # Example
//!
//! ```rust,ignore
//! use rasterfx_io::jpeg;
//!
//! let image = jpeg::read("photo.jpg")?;
//! jpeg::write_with_quality("preview.jpg", &image, 60)?;
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rasterfx_core::Image;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::convert::{from_rgb8, to_rgb8};
use crate::{IoError, IoResult};

/// Default encode quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    debug!(width, height, pixel_format = ?info.pixel_format, "decoded jpeg");

    let rgb: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks(2)
            .flat_map(|l16| {
                // High byte carries the displayable range.
                let g = l16[0];
                [g, g, g]
            })
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks(4)
            .flat_map(|cmyk| {
                let c = cmyk[0] as f32 / 255.0;
                let m = cmyk[1] as f32 / 255.0;
                let y = cmyk[2] as f32 / 255.0;
                let k = cmyk[3] as f32 / 255.0;
                [
                    ((1.0 - c) * (1.0 - k) * 255.0) as u8,
                    ((1.0 - m) * (1.0 - k) * 255.0) as u8,
                    ((1.0 - y) * (1.0 - k) * 255.0) as u8,
                ]
            })
            .collect(),
    };

    from_rgb8(height, width, &rgb)
}

/// Writes an image as an 8-bit RGB JPEG at the default quality.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    write_with_quality(path, image, DEFAULT_QUALITY)
}

/// Writes an image as an 8-bit RGB JPEG. `quality` runs 1-100.
pub fn write_with_quality<P: AsRef<Path>>(path: P, image: &Image, quality: u8) -> IoResult<()> {
    if quality == 0 || quality > 100 {
        return Err(IoError::EncodeError(format!(
            "quality must be in 1..=100: {quality}"
        )));
    }
    let width = u16::try_from(image.width())
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds JPEG limit", image.width())))?;
    let height = u16::try_from(image.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", image.height()))
    })?;

    let mut buffer = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut buffer, quality);
    encoder
        .encode(&to_rgb8(image), width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    std::fs::write(path.as_ref(), buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.jpg");
        let image = Image::filled(16, 16, [90.0, 140.0, 200.0]);

        write(&path, &image).expect("Write failed");
        let loaded = read(&path).expect("Read failed");

        assert_eq!(loaded.dimensions(), (16, 16));
        for (&got, &want) in loaded.data().iter().zip(image.data()) {
            assert!((got - want).abs() <= 4.0, "{got} vs {want}");
        }
    }

    #[test]
    fn test_quality_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.jpg");
        let image = Image::filled(8, 8, [128.0, 128.0, 128.0]);
        assert!(write_with_quality(&path, &image, 0).is_err());
        assert!(write_with_quality(&path, &image, 101).is_err());
        assert!(write_with_quality(&path, &image, 1).is_ok());
    }

    #[test]
    fn test_quality_affects_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = Image::new(32, 32);
        for row in 0..32 {
            for col in 0..32 {
                image.set_pixel(
                    row,
                    col,
                    [(row * 8) as f32, (col * 8) as f32, ((row * col) % 256) as f32],
                );
            }
        }

        let low_path = dir.path().join("low.jpg");
        let high_path = dir.path().join("high.jpg");
        write_with_quality(&low_path, &image, 50).expect("Write failed");
        write_with_quality(&high_path, &image, 99).expect("Write failed");

        let low_size = std::fs::metadata(&low_path).unwrap().len();
        let high_size = std::fs::metadata(&high_path).unwrap().len();
        assert!(high_size >= low_size);
    }

    #[test]
    fn test_grayscale_reads_as_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.jpg");
        {
            let mut buffer = Vec::new();
            let encoder = jpeg_encoder::Encoder::new(&mut buffer, 95);
            encoder
                .encode(&[200u8; 8 * 8], 8, 8, jpeg_encoder::ColorType::Luma)
                .unwrap();
            std::fs::write(&path, buffer).unwrap();
        }

        let image = read(&path).expect("Read failed");
        assert_eq!(image.dimensions(), (8, 8));
        let p = image.pixel(4, 4);
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
        assert!((p[0] - 200.0).abs() <= 4.0);
    }
}
