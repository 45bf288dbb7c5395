/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] strata_image::ImageError),

    /// Error when a decoded buffer has a channel count that cannot be mapped to RGB.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),

    /// Error when the image is too large for the target format.
    #[error("Image size {0} is not supported by the {1} format")]
    UnsupportedImageSize(strata_image::ImageSize, &'static str),

    /// Error to decode the PPM image.
    #[error("Failed to decode the ppm image. {0}")]
    PpmDecodeError(String),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error to encode the JPEG image.
    #[error("Error with Jpeg encoding. {0}")]
    JpegEncodingError(#[from] jpeg_encoder::EncodingError),

    /// Error when a project manifest cannot be parsed.
    #[error("Invalid project manifest {0}: {1}")]
    InvalidProjectManifest(std::path::PathBuf, String),

    /// Error when a layer name cannot be stored in a project manifest.
    #[error("Layer name cannot be written to a project: {0:?}")]
    InvalidLayerName(String),

    /// Error raised by the layer store.
    #[error("Failed to load layers. {0}")]
    Layer(#[from] strata_layers::LayerError),
}
