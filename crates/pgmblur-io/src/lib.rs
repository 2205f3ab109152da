#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// Binary graymap ("P5") encoding and decoding.
pub mod pgm;

pub use crate::error::IoError;
