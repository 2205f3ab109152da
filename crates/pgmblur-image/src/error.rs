use thiserror::Error;

/// An error type for the image module.
#[derive(Error, Debug)]
pub enum ImageError {
    /// Error when the image data does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the image sizes of an operation do not agree.
    #[error("Source size ({0}x{1}) does not match destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("The pixel index ({0}, {1}) is out of bounds for image of size ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
