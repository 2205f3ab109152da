use std::path::Path;

use pgmblur_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Byte cursor over a graymap header.
struct Header<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Header<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn expect_magic(&mut self) -> Result<(), IoError> {
        if self.buf.len() < 2 || &self.buf[..2] != b"P5" {
            return Err(IoError::PgmDecodeError(
                "missing \"P5\" magic number".to_string(),
            ));
        }
        self.pos = 2;
        Ok(())
    }

    /// Skip the whitespace run before the token, then read its digits.
    fn next_u32(&mut self, field: &str) -> Result<u32, IoError> {
        while self.pos < self.buf.len() && self.buf[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        let start = self.pos;
        while self.pos < self.buf.len() && self.buf[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::PgmDecodeError(format!(
                "invalid {} field",
                field
            )));
        }

        let token = std::str::from_utf8(&self.buf[start..self.pos])
            .map_err(|_| IoError::PgmDecodeError(format!("invalid {} field", field)))?;
        token
            .parse::<u32>()
            .map_err(|_| IoError::PgmDecodeError(format!("{} out of range", field)))
    }

    /// Consume the single whitespace byte separating the header from the
    /// samples.
    fn expect_separator(&mut self) -> Result<(), IoError> {
        match self.buf.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::PgmDecodeError(
                "expected whitespace after the maxval field".to_string(),
            )),
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

/// Decode a binary graymap ("P5") from raw bytes.
///
/// The header is the `P5` magic number followed by the width, height and
/// maxval fields separated by whitespace runs, then exactly one whitespace
/// byte before the samples. The declared maxval is kept as is and the
/// samples are read one byte each in row-major order. Bytes past the last
/// sample are ignored.
///
/// # Arguments
///
/// * `src` - The raw graymap bytes.
///
/// # Returns
///
/// The decoded grayscale image.
///
/// # Examples
///
/// ```
/// let bytes = b"P5\n2 1\n255\n\x07\x09";
/// let image = pgmblur_io::pgm::decode_pgm(bytes).unwrap();
///
/// assert_eq!(image.size().width, 2);
/// assert_eq!(image.size().height, 1);
/// assert_eq!(image.as_slice(), &[7, 9]);
/// ```
pub fn decode_pgm(src: &[u8]) -> Result<GrayImage, IoError> {
    let mut header = Header::new(src);
    header.expect_magic()?;

    let width = header.next_u32("width")? as usize;
    let height = header.next_u32("height")? as usize;
    let maxval = header.next_u32("maxval")?;
    header.expect_separator()?;

    let samples = header.rest();
    let expected = width * height;
    if samples.len() < expected {
        return Err(IoError::PgmDecodeError(format!(
            "expected {} samples, found {}",
            expected,
            samples.len()
        )));
    }

    Ok(GrayImage::new(
        ImageSize { width, height },
        maxval,
        samples[..expected].to_vec(),
    )?)
}

/// Read a binary graymap ("P5") image from the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the graymap file.
///
/// # Returns
///
/// The decoded grayscale image.
///
/// # Examples
///
/// ```
/// use pgmblur_io::pgm::read_image_pgm;
///
/// let image = read_image_pgm("../../tests/data/sample.pgm").unwrap();
///
/// assert_eq!(image.size().width, 8);
/// assert_eq!(image.size().height, 8);
/// ```
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let buf = std::fs::read(file_path)?;
    decode_pgm(&buf)
}

/// Encode a grayscale image as a binary graymap ("P5").
///
/// The header carries the image size and the declared maxval, followed by
/// one newline and the raw samples in row-major order.
///
/// # Arguments
///
/// * `image` - The image to encode.
///
/// # Returns
///
/// The graymap bytes.
pub fn encode_pgm(image: &GrayImage) -> Vec<u8> {
    let header = format!(
        "P5\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.maxval()
    );

    let mut buf = Vec::with_capacity(header.len() + image.as_slice().len());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(image.as_slice());
    buf
}

/// Write a grayscale image as a binary graymap ("P5") to the given file
/// path.
///
/// # Arguments
///
/// * `file_path` - The path to write the graymap to.
/// * `image` - The image to write.
pub fn write_image_pgm(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    let pgm_data = encode_pgm(image);
    std::fs::write(file_path, pgm_data)?;
    Ok(())
}
