use strata_image::{Image, ImageError};

/// Flip the input image horizontally.
///
/// Column `j` of every row moves to column `width - 1 - j`. Pixel positions are recomputed for
/// their new location.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::flip::horizontal_flip;
///
/// let image = Image::from_fn(ImageSize { width: 2, height: 3 }, |p| Color::from_rgb(p.x as u8, 0, 0));
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.size(), image.size());
/// assert_eq!(flipped.color_at(0, 0).unwrap(), Color::from_rgb(1, 0, 0));
/// ```
pub fn horizontal_flip(src: &Image) -> Result<Image, ImageError> {
    let last_col = src.width().saturating_sub(1);
    let src_data = src.as_slice();

    Ok(Image::from_fn(src.size(), |p| {
        src_data[p.y * src.width() + (last_col - p.x)].color()
    }))
}

/// Flip the input image vertically.
///
/// Row `i` moves to row `height - 1 - i`; the column order within each row is unchanged.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::flip::vertical_flip;
///
/// let image = Image::from_fn(ImageSize { width: 2, height: 3 }, |p| Color::from_rgb(0, p.y as u8, 0));
///
/// let flipped = vertical_flip(&image).unwrap();
///
/// assert_eq!(flipped.size(), image.size());
/// assert_eq!(flipped.color_at(0, 0).unwrap(), Color::from_rgb(0, 2, 0));
/// ```
pub fn vertical_flip(src: &Image) -> Result<Image, ImageError> {
    let last_row = src.height().saturating_sub(1);
    let src_data = src.as_slice();

    Ok(Image::from_fn(src.size(), |p| {
        src_data[(last_row - p.y) * src.width() + p.x].color()
    }))
}

#[cfg(test)]
mod tests {
    use strata_image::{Color, Image, ImageError, ImageSize};

    fn numbered(width: usize, height: usize) -> Image {
        Image::from_fn(ImageSize { width, height }, |p| {
            let v = (p.y * width + p.x) as u8;
            Color::from_rgb(v, v, v)
        })
    }

    fn levels(image: &Image) -> Vec<u8> {
        image.colors().map(|c| c.red()).collect()
    }

    #[test]
    fn test_hflip() -> Result<(), ImageError> {
        let image = numbered(2, 3);
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(levels(&flipped), vec![1u8, 0, 3, 2, 5, 4]);
        Ok(())
    }

    #[test]
    fn test_vflip() -> Result<(), ImageError> {
        let image = numbered(2, 3);
        let flipped = super::vertical_flip(&image)?;
        assert_eq!(levels(&flipped), vec![4u8, 5, 2, 3, 0, 1]);
        Ok(())
    }

    #[test]
    fn flip_recomputes_positions() -> Result<(), ImageError> {
        let image = numbered(3, 2);
        for flipped in [super::horizontal_flip(&image)?, super::vertical_flip(&image)?] {
            for (a, b) in flipped.as_slice().iter().zip(image.as_slice()) {
                assert_eq!(a.position(), b.position());
            }
        }
        Ok(())
    }

    #[test]
    fn flip_involution() -> Result<(), ImageError> {
        for (width, height) in [(1, 1), (2, 3), (4, 4), (5, 2), (0, 0)] {
            let image = numbered(width, height);
            assert_eq!(
                super::horizontal_flip(&super::horizontal_flip(&image)?)?,
                image
            );
            assert_eq!(super::vertical_flip(&super::vertical_flip(&image)?)?, image);
        }
        Ok(())
    }
}
