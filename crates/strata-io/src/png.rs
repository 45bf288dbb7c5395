use std::{fs, path::Path};

use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use strata_image::{Image, ImageSize};

use crate::{error::IoError, image_from_interleaved, image_to_rgb8};

/// Read a PNG image as 8-bit RGB.
///
/// Palette images are expanded, 16-bit samples are reduced to 8 bits, grayscale samples are
/// replicated into the three channels and alpha is dropped.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_png(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    log::info!("reading png image {}", file_path.display());
    let bytes = fs::read(file_path)?;
    decode_image_png(&bytes)
}

/// Decode a PNG image from raw bytes as 8-bit RGB.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the png file.
pub fn decode_image_png(bytes: &[u8]) -> Result<Image, IoError> {
    let mut decoder = Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "unsupported bit depth {:?}",
            info.bit_depth
        )));
    }

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };
    log::debug!("decoded png {} as {:?}", size, info.color_type);

    image_from_interleaved(size, &buf[..info.buffer_size()], info.color_type.samples())
}

/// Write an image as an 8-bit RGB PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to write.
pub fn write_image_png(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let size = image.size();
    let (Ok(width), Ok(height)) = (u32::try_from(size.width), u32::try_from(size.height)) else {
        return Err(IoError::UnsupportedImageSize(size, "png"));
    };

    log::info!("writing png image {} ({})", file_path.display(), size);
    let file = fs::File::create(file_path)?;

    let mut encoder = Encoder::new(file, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(&image_to_rgb8(image))
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_image::Color;

    fn encode_png(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        bytes
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = Image::from_fn(ImageSize::from([5, 4]), |p| {
            Color::from_rgb(p.x as u8 * 50, p.y as u8 * 60, 200)
        });
        write_image_png(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_png(&file_path)?;
        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn decode_gray_and_rgba() -> Result<(), IoError> {
        let gray = decode_image_png(&encode_png(2, 1, ColorType::Grayscale, &[7, 200]))?;
        assert_eq!(gray.color_at(0, 0)?, Color::from_rgb(7, 7, 7));
        assert_eq!(gray.color_at(1, 0)?, Color::from_rgb(200, 200, 200));

        let rgba = decode_image_png(&encode_png(
            1,
            1,
            ColorType::Rgba,
            &[10, 20, 30, 128],
        ))?;
        assert_eq!(rgba.color_at(0, 0)?, Color::from_rgb(10, 20, 30));
        Ok(())
    }

    #[test]
    fn read_rejects_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.txt");
        fs::write(&file_path, b"not a png")?;
        assert!(matches!(
            read_image_png(&file_path),
            Err(IoError::InvalidFileExtension(_))
        ));
        Ok(())
    }
}
