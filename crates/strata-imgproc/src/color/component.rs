use strata_image::{Color, Image, ImageError};

/// A single-channel view of a color, replicated into all three output channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The largest of the three channels.
    Value,
    /// `(r + g + g) / 3`, clamped.
    Intensity,
}

impl Component {
    /// Compute the component value of a color.
    pub fn value_of(&self, color: Color) -> u8 {
        let [r, g, b] = color.channels();
        match self {
            Component::Red => r,
            Component::Green => g,
            Component::Blue => b,
            Component::Value => r.max(g).max(b),
            // NOTE: green is weighted twice and blue is ignored
            Component::Intensity => {
                strata_image::color::clamp_channel((i64::from(r) + 2 * i64::from(g)) / 3)
            }
        }
    }
}

/// Replace every pixel by a gray level taken from one component of its color.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `component` - Which component to extract.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_imgproc::color::{extract_component, Component};
///
/// let image = Image::from_size_val(ImageSize { width: 1, height: 1 }, Color::from_rgb(10, 20, 30));
/// let value = extract_component(&image, Component::Value).unwrap();
///
/// assert_eq!(value.color_at(0, 0).unwrap(), Color::from_rgb(30, 30, 30));
/// ```
pub fn extract_component(src: &Image, component: Component) -> Result<Image, ImageError> {
    log::debug!("extracting {:?} component of {}", component, src.size());
    Ok(src.map_colors(|color| {
        let level = component.value_of(color);
        Color::from_rgb(level, level, level)
    }))
}
