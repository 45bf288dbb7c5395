#![deny(missing_docs)]
//! Color, pixel and image types shared by every strata crate.

/// color, position and pixel value types.
pub mod color;

/// Error types for the image module.
pub mod error;

/// immutable pixel grid.
pub mod image;

pub use crate::color::{Color, Pixel, Position};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
