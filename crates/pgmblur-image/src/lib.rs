#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image module containing the grayscale image type and its methods.
pub mod image;

/// error module containing the error types.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{GrayImage, ImageSize};
