use crate::error::ImageError;

/// Image size in pixels
///
/// # Examples
///
/// ```
/// use pgmblur_image::ImageSize;
///
/// let image_size = ImageSize {
///     width: 10,
///     height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An 8-bit grayscale image backed by a single contiguous buffer.
///
/// Samples are stored row by row with no padding, one byte per pixel, so
/// the pixel at `(x, y)` lives at index `y * width + x`.
#[derive(Clone)]
pub struct GrayImage {
    size: ImageSize,
    maxval: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image from raw sample data.
    ///
    /// The samples are taken as is and never rescaled; `maxval` is carried
    /// through to the encoder unchanged.
    ///
    /// # Arguments
    ///
    /// * `size` - The width and height of the image in pixels.
    /// * `maxval` - The declared maximum sample value.
    /// * `data` - The samples in row-major order, one byte per pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length does not match `width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgmblur_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     255,
    ///     vec![0u8, 1, 2, 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 2);
    /// assert_eq!(image.size().height, 2);
    /// assert_eq!(image.maxval(), 255);
    /// ```
    pub fn new(size: ImageSize, maxval: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        if size.width * size.height != data.len() {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, maxval, data })
    }

    /// Create a new image filled with a constant value.
    ///
    /// # Arguments
    ///
    /// * `size` - The width and height of the image in pixels.
    /// * `maxval` - The declared maximum sample value.
    /// * `val` - The value to fill the image with.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgmblur_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::from_size_val(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     255,
    ///     0,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[0, 0, 0, 0]);
    /// ```
    pub fn from_size_val(size: ImageSize, maxval: u32, val: u8) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height];
        Self::new(size, maxval, data)
    }

    /// Size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Number of columns of the image, alias of [`GrayImage::width`].
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Number of rows of the image, alias of [`GrayImage::height`].
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Declared maximum sample value of the image.
    pub fn maxval(&self) -> u32 {
        self.maxval
    }

    /// View of the samples in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the samples in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Value of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of bounds.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<u8, ImageError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        Ok(self.data[y * self.size.width + x])
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ImageError;
    use crate::image::{GrayImage, ImageSize};

    #[test]
    fn image_size() {
        let size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(size.width, 10);
        assert_eq!(size.height, 20);
    }

    #[test]
    fn image_size_from_array() {
        let size = ImageSize::from([3, 4]);
        assert_eq!(size.width, 3);
        assert_eq!(size.height, 4);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            255,
            vec![0u8; 6],
        )?;
        assert_eq!(image.size().width, 3);
        assert_eq!(image.size().height, 2);
        assert_eq!(image.cols(), 3);
        assert_eq!(image.rows(), 2);
        assert_eq!(image.maxval(), 255);
        assert_eq!(image.as_slice().len(), 6);

        Ok(())
    }

    #[test]
    fn image_data_mismatch() {
        let image = GrayImage::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            255,
            vec![0u8; 4],
        );
        assert!(matches!(image, Err(ImageError::InvalidDataLength(4, 6))));
    }

    #[test]
    fn image_from_size_val() -> Result<(), ImageError> {
        let image = GrayImage::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            255,
            128,
        )?;
        assert_eq!(image.as_slice(), &[128, 128, 128, 128]);

        Ok(())
    }

    #[test]
    fn image_get_pixel() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            255,
            vec![1, 2, 3, 4],
        )?;
        assert_eq!(image.get_pixel(0, 0)?, 1);
        assert_eq!(image.get_pixel(1, 0)?, 2);
        assert_eq!(image.get_pixel(0, 1)?, 3);
        assert_eq!(image.get_pixel(1, 1)?, 4);
        assert!(matches!(
            image.get_pixel(2, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 2))
        ));

        Ok(())
    }

    #[test]
    fn image_clone_is_deep() -> Result<(), ImageError> {
        let mut image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            255,
            vec![5, 9],
        )?;
        let copy = image.clone();
        image.as_slice_mut()[0] = 0;
        assert_eq!(copy.as_slice(), &[5, 9]);
        assert_eq!(image.as_slice(), &[0, 9]);

        Ok(())
    }

    #[test]
    fn image_zero_size() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            255,
            vec![],
        )?;
        assert_eq!(image.as_slice().len(), 0);

        Ok(())
    }
}
