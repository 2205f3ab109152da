use pgmblur_image::{GrayImage, ImageError};
use rayon::prelude::*;

// The serial and parallel passes share the same row and column workers so
// both execution modes produce identical bytes.

/// Mean of the clamped window around each sample of one row.
fn box_row(src_row: &[u8], dst_row: &mut [u8], radius: usize) {
    let cols = src_row.len();
    let radius = radius.min(cols);
    for (j, dst) in dst_row.iter_mut().enumerate() {
        let lo = j.saturating_sub(radius);
        let hi = (j + radius + 1).min(cols);
        let sum: f64 = src_row[lo..hi].iter().map(|&v| f64::from(v)).sum();
        *dst = (sum / (hi - lo) as f64).round() as u8;
    }
}

/// Mean of the clamped vertical window around each sample of one row.
///
/// The window bounds depend only on the row index, so the sample count is
/// hoisted out of the column loop.
fn box_col(src: &[u8], cols: usize, rows: usize, row: usize, dst_row: &mut [u8], radius: usize) {
    let radius = radius.min(rows);
    let lo = row.saturating_sub(radius);
    let hi = (row + radius + 1).min(rows);
    let count = (hi - lo) as f64;
    for (j, dst) in dst_row.iter_mut().enumerate() {
        let sum: f64 = (lo..hi).map(|i| f64::from(src[i * cols + j])).sum();
        *dst = (sum / count).round() as u8;
    }
}

fn check_same_size(src: &GrayImage, dst: &GrayImage) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Apply one horizontal box-filter pass.
///
/// Each output sample is the rounded mean of the window
/// `[x - radius, x + radius]` on its row, truncated at the row ends so
/// border samples average over fewer neighbors.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image with the same size as `src`.
/// * `radius` - Half-width of the averaging window in pixels.
///
/// # Errors
///
/// Returns an error if the images have different sizes.
pub(crate) fn box_blur_horizontal(
    src: &GrayImage,
    dst: &mut GrayImage,
    radius: usize,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    if src.as_slice().is_empty() {
        return Ok(());
    }

    let cols = src.cols();
    src.as_slice()
        .chunks_exact(cols)
        .zip(dst.as_slice_mut().chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| box_row(src_row, dst_row, radius));

    Ok(())
}

/// Apply one vertical box-filter pass.
///
/// Each output sample is the rounded mean of the window
/// `[y - radius, y + radius]` on its column, truncated at the image top
/// and bottom.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image with the same size as `src`.
/// * `radius` - Half-height of the averaging window in pixels.
///
/// # Errors
///
/// Returns an error if the images have different sizes.
pub(crate) fn box_blur_vertical(
    src: &GrayImage,
    dst: &mut GrayImage,
    radius: usize,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    if src.as_slice().is_empty() {
        return Ok(());
    }

    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();
    dst.as_slice_mut()
        .chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(row, dst_row)| box_col(src_data, cols, rows, row, dst_row, radius));

    Ok(())
}

/// Parallel version of [`box_blur_horizontal`] distributing rows over the
/// current thread pool.
pub(crate) fn box_blur_horizontal_parallel(
    src: &GrayImage,
    dst: &mut GrayImage,
    radius: usize,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    if src.as_slice().is_empty() {
        return Ok(());
    }

    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| box_row(src_row, dst_row, radius));

    Ok(())
}

/// Parallel version of [`box_blur_vertical`] distributing rows over the
/// current thread pool.
pub(crate) fn box_blur_vertical_parallel(
    src: &GrayImage,
    dst: &mut GrayImage,
    radius: usize,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    if src.as_slice().is_empty() {
        return Ok(());
    }

    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();
    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(row, dst_row)| box_col(src_data, cols, rows, row, dst_row, radius));

    Ok(())
}
