/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when a color channel falls outside of [0, 255].
    #[error("Channel {0} value {1} is out of range [0, 255]")]
    ChannelOutOfRange(&'static str, i64),

    /// Error when the rows of a pixel grid have different lengths.
    #[error("Row {0} has {1} pixels but row 0 has {2}")]
    RaggedRows(usize, usize, usize),

    /// Error when a pixel position does not match its index in the grid.
    #[error("Pixel at column {0}, row {1} reports position ({2}, {3})")]
    PositionMismatch(usize, usize, usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the kernel has no weights.
    #[error("Kernel must contain at least one weight")]
    EmptyKernel,

    /// Error when the kernel is not square.
    #[error("Kernel must be square, got {0} rows and {1} columns")]
    NonSquareKernel(usize, usize),

    /// Error when the kernel has an even dimension.
    #[error("Kernel dimensions must be odd, got {0}x{0}")]
    EvenKernelSize(usize),

    /// Error when a textual transform name cannot be parsed.
    #[error("Unknown transform: {0}")]
    UnknownTransform(String),

    /// Error when a transform parameter cannot be parsed.
    #[error("Invalid parameter for transform {0}: {1}")]
    InvalidTransformParameter(String, String),
}
