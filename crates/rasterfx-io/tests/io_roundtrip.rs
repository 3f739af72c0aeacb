//! Integration tests for extension-dispatched read and write.

use rasterfx_core::Image;
use rasterfx_io::{IoError, read, write};

fn gradient_image(height: u32, width: u32) -> Image {
    let mut image = Image::new(height, width);
    for row in 0..height {
        for col in 0..width {
            // Smooth ramp, kept well inside [0, 255].
            let v = (row * 5 + col * 3) as f32;
            image.set_pixel(row, col, [v, 255.0 - v, 128.0]);
        }
    }
    image
}

#[test]
fn png_write_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    let image = gradient_image(20, 30);

    write(&path, &image).expect("write failed");
    let loaded = read(&path).expect("read failed");

    assert_eq!(loaded.dimensions(), (20, 30));
    assert_eq!(loaded.data(), image.data());
}

#[test]
fn cross_format_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("frame.png");
    let jpg_path = dir.path().join("frame.jpg");
    let image = gradient_image(16, 16);

    write(&png_path, &image).expect("png write failed");
    let from_png = read(&png_path).expect("png read failed");
    write(&jpg_path, &from_png).expect("jpg write failed");
    let from_jpg = read(&jpg_path).expect("jpg read failed");

    assert_eq!(from_jpg.dimensions(), image.dimensions());
    // Lossy hop, so allow a loose per-sample tolerance.
    for (&got, &want) in from_jpg.data().iter().zip(image.data()) {
        assert!((got - want).abs() <= 24.0, "{got} vs {want}");
    }
}

#[test]
fn unsupported_extension_fails_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.bmp");
    let image = gradient_image(4, 4);

    // The file is never created; the extension gate fires first.
    let err = write(&path, &image).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
    assert!(!path.exists());

    let err = read(dir.path().join("missing.gif")).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
}
