use std::{fmt, path::Path, str::FromStr};

use strata_image::Image;

use crate::{error::IoError, jpeg, png, ppm};

/// The file formats strata can read and write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Plain text PPM (P3).
    Ppm,
    /// 8-bit RGB PNG.
    Png,
    /// RGB JPEG.
    Jpeg,
}

impl ImageFormat {
    /// Resolve the format from the extension of a path, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// use strata_io::functional::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_path("photo.JPG").unwrap(), ImageFormat::Jpeg);
    /// assert!(ImageFormat::from_path("notes.txt").is_err());
    /// ```
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))
    }

    /// The file extension written for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(()),
        }
    }
}

/// Reads an image from the given file path, choosing the decoder from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to a `.ppm`, `.png`, `.jpg` or `.jpeg` file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    match ImageFormat::from_path(file_path)? {
        ImageFormat::Ppm => ppm::read_image_ppm(file_path),
        ImageFormat::Png => png::read_image_png(file_path),
        ImageFormat::Jpeg => jpeg::read_image_jpeg(file_path),
    }
}

/// Writes an image to the given file path, choosing the encoder from the file extension.
///
/// JPEG files are written with [`jpeg::DEFAULT_QUALITY`].
///
/// # Arguments
///
/// * `file_path` - The path to a `.ppm`, `.png`, `.jpg` or `.jpeg` file.
/// * `image` - The image to write.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path)?;
    write_image_format(file_path, image, format, jpeg::DEFAULT_QUALITY)
}

/// Writes an image in an explicit format.
///
/// # Arguments
///
/// * `file_path` - The destination path, used as is.
/// * `image` - The image to write.
/// * `format` - The encoder to use.
/// * `quality` - The JPEG quality, ignored by the other formats.
pub fn write_image_format(
    file_path: impl AsRef<Path>,
    image: &Image,
    format: ImageFormat,
    quality: u8,
) -> Result<(), IoError> {
    match format {
        ImageFormat::Ppm => ppm::write_image_ppm(file_path, image),
        ImageFormat::Png => png::write_image_png(file_path, image),
        ImageFormat::Jpeg => jpeg::write_image_jpeg(file_path, image, quality),
    }
}
