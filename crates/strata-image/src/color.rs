use crate::error::ImageError;

/// Lower bound of a color channel.
pub const CHANNEL_MIN: i64 = 0;

/// Upper bound of a color channel.
pub const CHANNEL_MAX: i64 = 255;

/// An RGB color with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use strata_image::Color;
///
/// let color = Color::new(255, 128, 0).unwrap();
///
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.green(), 128);
/// assert_eq!(color.blue(), 0);
/// assert!(Color::new(256, 0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// Create a new color, validating that every channel lies in [0, 255].
    ///
    /// # Arguments
    ///
    /// * `red` - The red channel.
    /// * `green` - The green channel.
    /// * `blue` - The blue channel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ChannelOutOfRange`] naming the first offending channel.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self, ImageError> {
        Ok(Self {
            red: checked_channel("red", red.into())?,
            green: checked_channel("green", green.into())?,
            blue: checked_channel("blue", blue.into())?,
        })
    }

    /// Create a color from channels that are already known to be in range.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color by saturating each channel to [0, 255].
    ///
    /// Values above 255 become 255 and values below 0 become 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_image::Color;
    ///
    /// assert_eq!(Color::clamped(300, -4, 17), Color::from_rgb(255, 0, 17));
    /// ```
    pub fn clamped(red: i64, green: i64, blue: i64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The channels as an `[r, g, b]` array.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

/// Saturate a value to the nearest bound of [0, 255].
pub fn clamp_channel(value: i64) -> u8 {
    num_traits::clamp(value, CHANNEL_MIN, CHANNEL_MAX) as u8
}

fn checked_channel(name: &'static str, value: i64) -> Result<u8, ImageError> {
    if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
        return Err(ImageError::ChannelOutOfRange(name, value));
    }
    Ok(value as u8)
}

/// The location of a pixel in a grid, as a (column, row) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// The column of the pixel.
    pub x: usize,
    /// The row of the pixel.
    pub y: usize,
}

impl Position {
    /// Create a new position from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A color placed at a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    position: Position,
    color: Color,
}

impl Pixel {
    /// Create a new pixel.
    pub const fn new(position: Position, color: Color) -> Self {
        Self { position, color }
    }

    /// The position of the pixel.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The color of the pixel.
    pub fn color(&self) -> Color {
        self.color
    }

    /// A pixel at the same position with a different color.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            position: self.position,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Pixel, Position};
    use crate::error::ImageError;

    #[test]
    fn color_in_range() -> Result<(), ImageError> {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 255), (255, 0, 1)] {
            let color = Color::new(r, g, b)?;
            assert_eq!(color.red() as i32, r);
            assert_eq!(color.green() as i32, g);
            assert_eq!(color.blue() as i32, b);
        }
        Ok(())
    }

    #[test]
    fn color_out_of_range() {
        assert_eq!(
            Color::new(256, 0, 0),
            Err(ImageError::ChannelOutOfRange("red", 256))
        );
        assert_eq!(
            Color::new(0, -1, 0),
            Err(ImageError::ChannelOutOfRange("green", -1))
        );
        assert_eq!(
            Color::new(0, 0, 1000),
            Err(ImageError::ChannelOutOfRange("blue", 1000))
        );
    }

    #[test]
    fn color_clamped() {
        assert_eq!(Color::clamped(-10, 128, 999), Color::from_rgb(0, 128, 255));
        assert_eq!(
            Color::clamped(i64::MIN, i64::MAX, 255),
            Color::from_rgb(0, 255, 255)
        );
    }

    #[test]
    fn pixel_equality() {
        let a = Pixel::new(Position::new(1, 2), Color::from_rgb(1, 2, 3));
        let b = Pixel::new(Position::new(1, 2), Color::from_rgb(1, 2, 3));
        let c = Pixel::new(Position::new(2, 1), Color::from_rgb(1, 2, 3));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, a.with_color(Color::BLACK));
    }
}
