//! Image info command.
//!
//! Displays image dimensions, file size, and per-channel value ranges.

use crate::InfoArgs;
use anyhow::Result;
use rasterfx_core::Image;
use rasterfx_io::Format;
use std::fs;

const CHANNEL_NAMES: [&str; Image::CHANNELS] = ["R", "G", "B"];

/// Runs the info command, printing dimensions and channel statistics.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)?.len();
        let image = super::load_image(path)?;
        let (height, width) = image.dimensions();

        println!("{}", path.display());
        println!("  Resolution: {}x{}", width, height);
        println!("  Channels:   {}", Image::CHANNELS);
        println!("  Pixels:     {}", width as u64 * height as u64);
        println!("  File size:  {}", super::format_size(file_size));

        if !image.is_empty() {
            for (name, (lo, hi, mean)) in CHANNEL_NAMES.iter().zip(channel_stats(&image)) {
                println!("  {name}: min {lo:7.1}  max {hi:7.1}  mean {mean:7.1}");
            }
        }

        if verbose {
            if let Ok(format) = Format::from_path(path) {
                println!("  Format:     {}", format.name());
            }
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Per-channel (min, max, mean) over the whole image.
fn channel_stats(image: &Image) -> [(f32, f32, f32); Image::CHANNELS] {
    let mut stats = [(f32::MAX, f32::MIN, 0.0f64); Image::CHANNELS];
    for pixel in image.data().chunks_exact(Image::CHANNELS) {
        for (channel, &value) in pixel.iter().enumerate() {
            let (lo, hi, sum) = &mut stats[channel];
            *lo = lo.min(value);
            *hi = hi.max(value);
            *sum += value as f64;
        }
    }

    let (height, width) = image.dimensions();
    let count = height as f64 * width as f64;
    stats.map(|(lo, hi, sum)| (lo, hi, (sum / count) as f32))
}
