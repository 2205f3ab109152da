#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pgmblur_image as image;

#[doc(inline)]
pub use pgmblur_imgproc as imgproc;

#[doc(inline)]
pub use pgmblur_io as io;
