use crate::color::{Color, Pixel, Position};
use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use strata_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of pixels covered by this size, or `None` if it overflows `usize`.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An immutable, rectangular grid of pixels stored in row-major order.
///
/// Every pixel reports the position it occupies in the grid. Transforms never mutate an image;
/// they build a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl Image {
    /// Create a new image from a grid of pixel rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - The pixel rows, top to bottom. The width is the length of row 0.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::RaggedRows`] if a row differs in length from row 0, and
    /// [`ImageError::PositionMismatch`] if a pixel reports a position other than its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_image::{Color, Image, Pixel, Position};
    ///
    /// let rows = vec![vec![
    ///     Pixel::new(Position::new(0, 0), Color::WHITE),
    ///     Pixel::new(Position::new(1, 0), Color::BLACK),
    /// ]];
    ///
    /// let image = Image::new(rows).unwrap();
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 1);
    /// ```
    pub fn new(rows: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ImageError::RaggedRows(y, row.len(), width));
            }
            for (x, pixel) in row.into_iter().enumerate() {
                let position = pixel.position();
                if position != Position::new(x, y) {
                    return Err(ImageError::PositionMismatch(x, y, position.x, position.y));
                }
                data.push(pixel);
            }
        }

        Ok(Self {
            size: ImageSize { width, height },
            data,
        })
    }

    /// Create a new image from row-major colors.
    ///
    /// # Errors
    ///
    /// If the number of colors does not match the image size, an error is returned.
    pub fn from_colors(size: ImageSize, colors: Vec<Color>) -> Result<Self, ImageError> {
        if colors.len() != size.area() {
            return Err(ImageError::InvalidDataLength(colors.len(), size.area()));
        }

        let data = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| Pixel::new(position_of(i, size.width), color))
            .collect();

        Ok(Self { size, data })
    }

    /// Create a new image by evaluating `f` at every position in row-major order.
    pub fn from_fn(size: ImageSize, mut f: impl FnMut(Position) -> Color) -> Self {
        let data = (0..size.area())
            .map(|i| {
                let position = position_of(i, size.width);
                Pixel::new(position, f(position))
            })
            .collect();

        Self { size, data }
    }

    /// Create a new image filled with a single color.
    pub fn from_size_val(size: ImageSize, color: Color) -> Self {
        Self::from_fn(size, |_| color)
    }

    /// The 1x1 black image shown when there is nothing visible to display.
    pub fn placeholder() -> Self {
        Self::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            Color::BLACK,
        )
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Total number of pixels.
    pub fn num_pixels(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel at column `x` and row `y`, if it is inside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.data.get(y * self.size.width + x)
    }

    /// Get the color at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the index is outside of the grid, an error is returned.
    pub fn color_at(&self, x: usize, y: usize) -> Result<Color, ImageError> {
        self.get(x, y).map(Pixel::color).ok_or(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            self.size.width,
            self.size.height,
        ))
    }

    /// A read-only row-major view of the pixels.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// Iterate over the rows of the image, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        let width = self.size.width;
        (0..self.size.height).map(move |y| &self.data[y * width..(y + 1) * width])
    }

    /// Iterate over the colors in row-major order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.data.iter().map(Pixel::color)
    }

    /// A copy of the pixel grid as nested rows.
    ///
    /// Mutating the returned grid never affects the image.
    pub fn pixels(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Build a new image of the same size by mapping every pixel's color.
    pub fn map_colors(&self, f: impl Fn(Color) -> Color) -> Self {
        let data = self
            .data
            .iter()
            .map(|pixel| pixel.with_color(f(pixel.color())))
            .collect();

        Self {
            size: self.size,
            data,
        }
    }
}

fn position_of(index: usize, width: usize) -> Position {
    Position::new(index % width, index / width)
}
