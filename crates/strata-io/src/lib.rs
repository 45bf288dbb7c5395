#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// High-level read and write functions dispatching on the file extension.
pub mod functional;

/// JPEG image encoding and decoding.
pub mod jpeg;

/// PNG image encoding and decoding.
pub mod png;

/// Plain text PPM (P3) image encoding and decoding.
pub mod ppm;

/// Multi-layer project directories.
pub mod project;

pub use crate::error::IoError;

use strata_image::{Color, Image, ImageSize};

// build an image from interleaved 8-bit samples with `channels` samples per pixel
fn image_from_interleaved(
    size: ImageSize,
    buf: &[u8],
    channels: usize,
) -> Result<Image, IoError> {
    if !(1..=4).contains(&channels) {
        return Err(IoError::UnsupportedChannels(channels));
    }
    let colors = buf
        .chunks_exact(channels)
        .take(size.area())
        .map(|px| match px {
            [l] | [l, _] => Color::from_rgb(*l, *l, *l),
            [r, g, b] | [r, g, b, _] => Color::from_rgb(*r, *g, *b),
            _ => Color::BLACK,
        })
        .collect();
    Ok(Image::from_colors(size, colors)?)
}

// flatten an image into interleaved rgb8 samples
fn image_to_rgb8(image: &Image) -> Vec<u8> {
    image.colors().flat_map(|c| c.channels()).collect()
}
