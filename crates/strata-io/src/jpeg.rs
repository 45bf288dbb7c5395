use std::{fs, path::Path};

use jpeg_encoder::{ColorType, Encoder};
use strata_image::{Image, ImageSize};

use crate::{error::IoError, image_from_interleaved, image_to_rgb8};

/// Default quality used when writing JPEG images.
pub const DEFAULT_QUALITY: u8 = 95;

/// Write an image as an RGB JPEG.
///
/// # Arguments
///
/// * `file_path` - The path to the JPEG image.
/// * `image` - The image to write.
/// * `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest).
pub fn write_image_jpeg(
    file_path: impl AsRef<Path>,
    image: &Image,
    quality: u8,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let size = image.size();
    let (Ok(width), Ok(height)) = (u16::try_from(size.width), u16::try_from(size.height)) else {
        return Err(IoError::UnsupportedImageSize(size, "jpeg"));
    };

    log::info!(
        "writing jpeg image {} ({}, quality {})",
        file_path.display(),
        size,
        quality
    );
    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(&image_to_rgb8(image), width, height, ColorType::Rgb)?;
    Ok(())
}

/// Read a JPEG image as 8-bit RGB.
///
/// # Arguments
///
/// * `file_path` - The path to the JPEG file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_jpeg(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.extension().map_or(true, |ext| {
        !ext.eq_ignore_ascii_case("jpg") && !ext.eq_ignore_ascii_case("jpeg")
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    log::info!("reading jpeg image {}", file_path.display());
    let jpeg_data = fs::read(file_path)?;
    decode_image_jpeg(&jpeg_data)
}

/// Decode a JPEG image from raw bytes as 8-bit RGB.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the jpeg file.
pub fn decode_image_jpeg(bytes: &[u8]) -> Result<Image, IoError> {
    let mut decoder = zune_jpeg::JpegDecoder::new(bytes);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;
    let channels = if image_size.area() == 0 {
        3
    } else {
        img_data.len() / image_size.area()
    };
    log::debug!("decoded jpeg {} with {} channels", image_size, channels);

    image_from_interleaved(image_size, &img_data, channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_image::Color;

    #[test]
    fn read_write_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("flat.jpeg");

        let color = Color::from_rgb(120, 60, 200);
        let image = Image::from_size_val(ImageSize::from([16, 8]), color);
        write_image_jpeg(&file_path, &image, 100)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_jpeg(&file_path)?;
        assert_eq!(image_back.size(), image.size());

        // lossy, so only check that a flat color stays close
        let back = image_back.color_at(7, 3)?;
        for (a, b) in back.channels().iter().zip(color.channels()) {
            assert!((*a as i32 - b as i32).abs() <= 8, "{back:?} vs {color:?}");
        }
        Ok(())
    }

    #[test]
    fn read_checks_path() {
        assert!(matches!(
            read_image_jpeg("missing.jpg"),
            Err(IoError::FileDoesNotExist(_))
        ));
    }
}
