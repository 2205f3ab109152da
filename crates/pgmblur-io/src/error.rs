use thiserror::Error;

/// An error type for the io module.
#[derive(Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pgmblur_image::ImageError),

    /// Error to decode the graymap.
    #[error("Failed to decode the pgm image. {0}")]
    PgmDecodeError(String),
}
