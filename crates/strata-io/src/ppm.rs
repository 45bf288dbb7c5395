use std::{fmt::Write as _, fs, path::Path};

use strata_image::{Color, Image, ImageSize};

use crate::error::IoError;

const MAGIC: &str = "P3";

/// Read a plain text PPM (P3) image.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("ppm"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    log::info!("reading ppm image {}", file_path.display());
    let text = fs::read_to_string(file_path)?;
    decode_image_ppm(&text)
}

/// Decode a plain text PPM (P3) image from its contents.
///
/// Lines starting with `#` are comments. The remaining text is a sequence of whitespace
/// separated tokens: the `P3` magic, width, height, maximum value, then three channel values per
/// pixel in row-major order. Channel values must lie in [0, 255] whatever the declared maximum.
///
/// # Example
///
/// ```
/// use strata_image::Color;
/// use strata_io::ppm::decode_image_ppm;
///
/// let image = decode_image_ppm("P3\n# a comment\n2 1\n255\n255 0 0 0 0 255\n").unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.color_at(1, 0).unwrap(), Color::from_rgb(0, 0, 255));
/// ```
pub fn decode_image_ppm(text: &str) -> Result<Image, IoError> {
    let mut tokens = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some(MAGIC) => {}
        Some(other) => {
            return Err(IoError::PpmDecodeError(format!(
                "plain ppm data must begin with {MAGIC}, found {other}"
            )))
        }
        None => return Err(IoError::PpmDecodeError("empty ppm data".to_string())),
    }

    let mut next_number = |what: &str| -> Result<i64, IoError> {
        let token = tokens
            .next()
            .ok_or_else(|| IoError::PpmDecodeError(format!("missing {what}")))?;
        token
            .parse::<i64>()
            .map_err(|e| IoError::PpmDecodeError(format!("invalid {what} {token}: {e}")))
    };

    let width = next_number("width")?;
    let height = next_number("height")?;
    let max_value = next_number("maximum value")?;

    let (Ok(width), Ok(height)) = (usize::try_from(width), usize::try_from(height)) else {
        return Err(IoError::PpmDecodeError(format!(
            "invalid image size {width}x{height}"
        )));
    };
    let size = ImageSize { width, height };
    let num_pixels = size.checked_area().ok_or_else(|| {
        IoError::PpmDecodeError(format!("image size {width}x{height} overflows"))
    })?;

    if max_value != 255 {
        log::warn!("ppm maximum value is {max_value}, channels are still read as 8-bit");
    }

    // the declared size is untrusted, grow with the pixel data actually present
    let mut colors = Vec::new();
    for _ in 0..num_pixels {
        let r = next_number("red channel")?;
        let g = next_number("green channel")?;
        let b = next_number("blue channel")?;
        colors.push(color_from_values(r, g, b)?);
    }

    Ok(Image::from_colors(size, colors)?)
}

fn color_from_values(r: i64, g: i64, b: i64) -> Result<Color, IoError> {
    let narrow = |v: i64| {
        i32::try_from(v)
            .map_err(|_| IoError::PpmDecodeError(format!("channel value {v} overflows")))
    };
    Ok(Color::new(narrow(r)?, narrow(g)?, narrow(b)?)?)
}

/// Encode an image as plain text PPM (P3).
///
/// The output is `P3\n<width> <height>\n255\n` followed by one line per row, where every pixel
/// is written as `R G B ` and the row ends with `\n`.
///
/// # Example
///
/// ```
/// use strata_image::{Color, Image, ImageSize};
/// use strata_io::ppm::encode_image_ppm;
///
/// let image = Image::from_size_val(ImageSize { width: 2, height: 1 }, Color::from_rgb(1, 2, 3));
///
/// assert_eq!(encode_image_ppm(&image), "P3\n2 1\n255\n1 2 3 1 2 3 \n");
/// ```
pub fn encode_image_ppm(image: &Image) -> String {
    let mut out = format!("{MAGIC}\n{} {}\n255\n", image.width(), image.height());
    for row in image.rows() {
        for pixel in row {
            let [r, g, b] = pixel.color().channels();
            // writing into a String cannot fail
            let _ = write!(out, "{r} {g} {b} ");
        }
        out.push('\n');
    }
    out
}

/// Write an image as plain text PPM (P3), creating parent directories as needed.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM file.
/// * `image` - The image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    log::info!("writing ppm image {} ({})", file_path.display(), image.size());
    fs::write(file_path, encode_image_ppm(image))?;
    Ok(())
}
