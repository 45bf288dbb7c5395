use std::fmt;
use std::str::FromStr;

use strata_image::{Image, ImageError};

use crate::color::{extract_component, transform_color_matrix, ColorMatrix, Component};
use crate::enhance::{brighten, darken};
use crate::filter::{convolve, kernels, Kernel};
use crate::flip::{horizontal_flip, vertical_flip};

/// An image-to-image transform, parameterized by its data.
///
/// Every variant maps an image to a new image of the same size; the source is never modified.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::transform::Transform;
///
/// let image = Image::from_size_val(ImageSize { width: 2, height: 2 }, Color::from_rgb(100, 50, 0));
///
/// let transform: Transform = "brighten=20".parse().unwrap();
/// let brighter = transform.apply(&image).unwrap();
///
/// assert_eq!(brighter.color_at(0, 0).unwrap(), Color::from_rgb(120, 70, 20));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    /// Convolution with zero padding.
    Convolve(Kernel),
    /// Per-pixel channel mixing.
    ColorMatrix(ColorMatrix),
    /// Gray level taken from one component of every color.
    Component(Component),
    /// Mirror the columns.
    HorizontalFlip,
    /// Mirror the rows.
    VerticalFlip,
    /// Add a value to every channel.
    Brighten(i32),
    /// Subtract a value from every channel.
    Darken(i32),
}

impl Transform {
    /// The 3x3 blur.
    pub fn blur() -> Self {
        Transform::Convolve(kernels::blur_kernel())
    }

    /// The 5x5 sharpen.
    pub fn sharpen() -> Self {
        Transform::Convolve(kernels::sharpen_kernel())
    }

    /// Luma grayscale.
    pub fn greyscale() -> Self {
        Transform::ColorMatrix(ColorMatrix::LUMA)
    }

    /// Sepia tone.
    pub fn sepia() -> Self {
        Transform::ColorMatrix(ColorMatrix::SEPIA)
    }

    /// Apply the transform to an image, returning a new image.
    pub fn apply(&self, src: &Image) -> Result<Image, ImageError> {
        match self {
            Transform::Convolve(kernel) => convolve(src, kernel),
            Transform::ColorMatrix(matrix) => transform_color_matrix(src, matrix),
            Transform::Component(component) => extract_component(src, *component),
            Transform::HorizontalFlip => horizontal_flip(src),
            Transform::VerticalFlip => vertical_flip(src),
            Transform::Brighten(value) => brighten(src, *value),
            Transform::Darken(value) => darken(src, *value),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Convolve(kernel) if *kernel == kernels::blur_kernel() => write!(f, "blur"),
            Transform::Convolve(kernel) if *kernel == kernels::sharpen_kernel() => {
                write!(f, "sharpen")
            }
            Transform::Convolve(kernel) => {
                write!(f, "convolve({}x{})", kernel.size(), kernel.size())
            }
            Transform::ColorMatrix(matrix) if *matrix == ColorMatrix::LUMA => {
                write!(f, "greyscale")
            }
            Transform::ColorMatrix(matrix) if *matrix == ColorMatrix::SEPIA => write!(f, "sepia"),
            Transform::ColorMatrix(matrix) => write!(f, "color-matrix({:?})", matrix.0),
            Transform::Component(component) => match component {
                Component::Red => write!(f, "red"),
                Component::Green => write!(f, "green"),
                Component::Blue => write!(f, "blue"),
                Component::Value => write!(f, "value"),
                Component::Intensity => write!(f, "intensity"),
            },
            Transform::HorizontalFlip => write!(f, "horizontal-flip"),
            Transform::VerticalFlip => write!(f, "vertical-flip"),
            Transform::Brighten(value) => write!(f, "brighten={value}"),
            Transform::Darken(value) => write!(f, "darken={value}"),
        }
    }
}

impl FromStr for Transform {
    type Err = ImageError;

    /// Parse a transform from its command name, e.g. `sepia` or `darken=30`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, param) = match s.split_once('=') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s, None),
        };

        let parse_value = |param: Option<&str>| -> Result<i32, ImageError> {
            let param = param.ok_or_else(|| {
                ImageError::InvalidTransformParameter(name.to_string(), "missing value".to_string())
            })?;
            param.parse::<i32>().map_err(|e| {
                ImageError::InvalidTransformParameter(name.to_string(), format!("{param}: {e}"))
            })
        };

        let transform = match name {
            "blur" => Transform::blur(),
            "sharpen" => Transform::sharpen(),
            "greyscale" | "grayscale" | "luma" => Transform::greyscale(),
            "sepia" => Transform::sepia(),
            "red" => Transform::Component(Component::Red),
            "green" => Transform::Component(Component::Green),
            "blue" => Transform::Component(Component::Blue),
            "value" => Transform::Component(Component::Value),
            "intensity" => Transform::Component(Component::Intensity),
            "horizontal-flip" => Transform::HorizontalFlip,
            "vertical-flip" => Transform::VerticalFlip,
            "brighten" => return Ok(Transform::Brighten(parse_value(param)?)),
            "darken" => return Ok(Transform::Darken(parse_value(param)?)),
            _ => return Err(ImageError::UnknownTransform(s.to_string())),
        };

        if let Some(param) = param {
            return Err(ImageError::InvalidTransformParameter(
                name.to_string(),
                format!("unexpected value {param}"),
            ));
        }

        Ok(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_image::{Color, ImageSize};

    #[test]
    fn parse_names() -> Result<(), ImageError> {
        assert_eq!("blur".parse::<Transform>()?, Transform::blur());
        assert_eq!("sharpen".parse::<Transform>()?, Transform::sharpen());
        assert_eq!("greyscale".parse::<Transform>()?, Transform::greyscale());
        assert_eq!("sepia".parse::<Transform>()?, Transform::sepia());
        assert_eq!(
            "value".parse::<Transform>()?,
            Transform::Component(Component::Value)
        );
        assert_eq!(
            "horizontal-flip".parse::<Transform>()?,
            Transform::HorizontalFlip
        );
        assert_eq!("darken=30".parse::<Transform>()?, Transform::Darken(30));
        assert_eq!("brighten=-5".parse::<Transform>()?, Transform::Brighten(-5));
        Ok(())
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "emboss".parse::<Transform>(),
            Err(ImageError::UnknownTransform("emboss".to_string()))
        );
        assert!(matches!(
            "brighten".parse::<Transform>(),
            Err(ImageError::InvalidTransformParameter(..))
        ));
        assert!(matches!(
            "darken=lots".parse::<Transform>(),
            Err(ImageError::InvalidTransformParameter(..))
        ));
        assert!(matches!(
            "sepia=2".parse::<Transform>(),
            Err(ImageError::InvalidTransformParameter(..))
        ));
    }

    #[test]
    fn display_parses_back() -> Result<(), ImageError> {
        for name in [
            "blur",
            "sharpen",
            "greyscale",
            "sepia",
            "red",
            "green",
            "blue",
            "value",
            "intensity",
            "horizontal-flip",
            "vertical-flip",
            "brighten=12",
            "darken=7",
        ] {
            assert_eq!(name.parse::<Transform>()?.to_string(), name);
        }
        Ok(())
    }

    #[test]
    fn apply_preserves_size_and_source() -> Result<(), ImageError> {
        let image = Image::from_fn(
            ImageSize {
                width: 4,
                height: 3,
            },
            |p| Color::from_rgb((p.x * 60) as u8, (p.y * 80) as u8, 128),
        );
        let snapshot = image.clone();

        for transform in [
            Transform::blur(),
            Transform::sharpen(),
            Transform::greyscale(),
            Transform::sepia(),
            Transform::Component(Component::Intensity),
            Transform::HorizontalFlip,
            Transform::VerticalFlip,
            Transform::Brighten(40),
            Transform::Darken(40),
        ] {
            let dst = transform.apply(&image)?;
            assert_eq!(dst.size(), image.size());
        }
        assert_eq!(image, snapshot);
        Ok(())
    }
}
