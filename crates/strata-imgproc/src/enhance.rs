use strata_image::{Color, Image, ImageError};

/// Shift every channel of every pixel by `value`, saturating at 0 and 255.
///
/// A negative `value` darkens the image.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `value` - The amount added to each channel.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::enhance::brighten;
///
/// let image = Image::from_size_val(ImageSize { width: 2, height: 1 }, Color::from_rgb(10, 200, 250));
/// let brighter = brighten(&image, 10).unwrap();
///
/// assert_eq!(brighter.color_at(1, 0).unwrap(), Color::from_rgb(20, 210, 255));
/// ```
pub fn brighten(src: &Image, value: i32) -> Result<Image, ImageError> {
    log::debug!("shifting intensity of {} by {}", src.size(), value);
    Ok(shift_intensity(src, i64::from(value)))
}

/// Subtract `value` from every channel of every pixel, saturating at 0 and 255.
///
/// A negative `value` brightens the image.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `value` - The amount subtracted from each channel.
pub fn darken(src: &Image, value: i32) -> Result<Image, ImageError> {
    log::debug!("shifting intensity of {} by -{}", src.size(), value);
    Ok(shift_intensity(src, -i64::from(value)))
}

fn shift_intensity(src: &Image, delta: i64) -> Image {
    src.map_colors(|color| {
        let [r, g, b] = color.channels().map(|c| i64::from(c) + delta);
        Color::clamped(r, g, b)
    })
}
