use strata_image::{Color, Image, ImageError};

/// A 3x3 matrix mixing the red, green and blue channels of a color.
///
/// Row `k` produces output channel `k` as the dot product of the row with `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Luma grayscale using the Rec. 709 coefficients on every output channel.
    pub const LUMA: ColorMatrix = ColorMatrix([
        [0.2126, 0.7152, 0.0722],
        [0.2126, 0.7152, 0.0722],
        [0.2126, 0.7152, 0.0722],
    ]);

    /// Sepia tone.
    pub const SEPIA: ColorMatrix = ColorMatrix([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]);

    /// Map a single color through the matrix.
    ///
    /// Each output channel is truncated toward zero and then clamped to [0, 255].
    pub fn apply(&self, color: Color) -> Color {
        let [r, g, b] = color.channels().map(f64::from);
        let [c0, c1, c2] = self.0.map(|row| (row[0] * r + row[1] * g + row[2] * b) as i64);
        Color::clamped(c0, c1, c2)
    }
}

/// Apply a color matrix to every pixel of an image.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `matrix` - The channel mixing matrix.
///
/// # Returns
///
/// A new image with the same size and pixel positions.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::color::{transform_color_matrix, ColorMatrix};
///
/// let image = Image::from_size_val(ImageSize { width: 2, height: 2 }, Color::from_rgb(255, 0, 0));
/// let gray = transform_color_matrix(&image, &ColorMatrix::LUMA).unwrap();
///
/// assert_eq!(gray.color_at(0, 0).unwrap(), Color::from_rgb(54, 54, 54));
/// ```
pub fn transform_color_matrix(src: &Image, matrix: &ColorMatrix) -> Result<Image, ImageError> {
    log::debug!("applying color matrix {:?} to {}", matrix.0, src.size());
    Ok(src.map_colors(|color| matrix.apply(color)))
}

/// Convert an image to luma grayscale.
///
/// Y = 0.2126 * R + 0.7152 * G + 0.0722 * B
pub fn gray_from_rgb(src: &Image) -> Result<Image, ImageError> {
    transform_color_matrix(src, &ColorMatrix::LUMA)
}

/// Apply a sepia tone to an image.
pub fn sepia_from_rgb(src: &Image) -> Result<Image, ImageError> {
    transform_color_matrix(src, &ColorMatrix::SEPIA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_image::ImageSize;

    #[test]
    fn luma_weights() {
        assert_eq!(
            ColorMatrix::LUMA.apply(Color::from_rgb(255, 0, 0)),
            Color::from_rgb(54, 54, 54)
        );
        assert_eq!(
            ColorMatrix::LUMA.apply(Color::from_rgb(0, 255, 0)),
            Color::from_rgb(182, 182, 182)
        );
        assert_eq!(
            ColorMatrix::LUMA.apply(Color::from_rgb(0, 0, 255)),
            Color::from_rgb(18, 18, 18)
        );
        assert_eq!(ColorMatrix::LUMA.apply(Color::BLACK), Color::BLACK);
    }

    #[test]
    fn sepia_saturates() {
        // every row sums above one, so white overflows on red and green
        assert_eq!(
            ColorMatrix::SEPIA.apply(Color::WHITE),
            Color::from_rgb(255, 255, 238)
        );
    }

    #[test]
    fn sepia_is_not_idempotent() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            Color::from_rgb(255, 0, 0),
        );
        let once = sepia_from_rgb(&image)?;
        let twice = sepia_from_rgb(&once)?;

        assert_eq!(once.color_at(0, 0)?, Color::from_rgb(100, 88, 69));
        assert_eq!(twice.color_at(0, 0)?, Color::from_rgb(120, 106, 83));
        Ok(())
    }

    #[test]
    fn negative_weights_clamp_to_zero() {
        let invert = ColorMatrix([[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(
            invert.apply(Color::from_rgb(10, 20, 30)),
            Color::from_rgb(0, 0, 30)
        );
    }
}
