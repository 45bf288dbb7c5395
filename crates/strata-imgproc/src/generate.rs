use strata_image::{Color, Image, ImageSize};

/// Create a checkerboard image alternating between two colors, one pixel per cell.
///
/// The pixel at column `x` and row `y` uses `first` when `x % 2 + y % 2` is even and `second`
/// otherwise, so the top-left pixel and its diagonal neighbors share `first`.
///
/// # Arguments
///
/// * `size` - The size of the generated image.
/// * `first` - The color of the top-left cell.
/// * `second` - The alternate color.
///
/// # Example
///
/// ```
/// use strata_image::{Color, ImageSize};
/// use strata_imgproc::generate::checkerboard;
///
/// let board = checkerboard(ImageSize { width: 2, height: 2 }, Color::WHITE, Color::BLACK);
///
/// assert_eq!(board.color_at(0, 0).unwrap(), Color::WHITE);
/// assert_eq!(board.color_at(1, 0).unwrap(), Color::BLACK);
/// assert_eq!(board.color_at(1, 1).unwrap(), Color::WHITE);
/// ```
pub fn checkerboard(size: ImageSize, first: Color, second: Color) -> Image {
    Image::from_fn(size, |p| {
        if (p.x % 2 + p.y % 2) % 2 == 0 {
            first
        } else {
            second
        }
    })
}
