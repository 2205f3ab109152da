use pgmblur_image::{GrayImage, ImageError};
use thiserror::Error;

use super::box_blur::{
    box_blur_horizontal, box_blur_horizontal_parallel, box_blur_vertical,
    box_blur_vertical_parallel,
};
use super::kernels;
use crate::parallel::{ExecutionStrategy, ParallelError};

/// Number of box-filter iterations the approximation runs; each iteration
/// is one horizontal and one vertical pass.
const ITERATIONS: usize = 3;

/// Errors produced by the blur pipeline.
#[derive(Error, Debug)]
pub enum BlurError {
    /// Error coming from the image buffers.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error coming from the execution strategy.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Approximate a Gaussian blur by running three iterations of a separable
/// box filter over the image, a horizontal pass followed by a vertical
/// pass each time. Every pass uses the same radius, derived from `sigma`
/// and `num_boxes` via [`kernels::box_radius`].
///
/// The source image is left untouched and the blurred samples are
/// returned as a new image with the same size and maxval. All strategies
/// produce identical bytes for the same input.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `sigma` - Standard deviation of the approximated Gaussian.
/// * `num_boxes` - Number of box passes the radius is derived for.
/// * `strategy` - How the passes are executed.
///
/// # Errors
///
/// Returns an error if the strategy is invalid or the intermediate
/// buffers cannot be created.
///
/// # Examples
///
/// ```
/// use pgmblur_image::{GrayImage, ImageSize};
/// use pgmblur_imgproc::filter::box_blur_fast;
/// use pgmblur_imgproc::parallel::ExecutionStrategy;
///
/// let image = GrayImage::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     255,
///     128,
/// )
/// .unwrap();
///
/// let blurred = box_blur_fast(&image, 1.0, 3, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(blurred.as_slice(), image.as_slice());
/// ```
pub fn box_blur_fast(
    src: &GrayImage,
    sigma: f32,
    num_boxes: u32,
    strategy: ExecutionStrategy,
) -> Result<GrayImage, BlurError> {
    let radius = kernels::box_radius(sigma, num_boxes);

    match strategy {
        ExecutionStrategy::Serial => Ok(blur_passes_serial(src, radius)?),
        _ => Ok(strategy.install(|| blur_passes_parallel(src, radius))??),
    }
}

fn blur_passes_serial(src: &GrayImage, radius: usize) -> Result<GrayImage, ImageError> {
    let mut front = src.clone();
    let mut back = GrayImage::from_size_val(src.size(), src.maxval(), 0)?;

    for _ in 0..ITERATIONS {
        box_blur_horizontal(&front, &mut back, radius)?;
        std::mem::swap(&mut front, &mut back);
        box_blur_vertical(&front, &mut back, radius)?;
        std::mem::swap(&mut front, &mut back);
    }

    Ok(front)
}

fn blur_passes_parallel(src: &GrayImage, radius: usize) -> Result<GrayImage, ImageError> {
    let mut front = src.clone();
    let mut back = GrayImage::from_size_val(src.size(), src.maxval(), 0)?;

    for _ in 0..ITERATIONS {
        box_blur_horizontal_parallel(&front, &mut back, radius)?;
        std::mem::swap(&mut front, &mut back);
        box_blur_vertical_parallel(&front, &mut back, radius)?;
        std::mem::swap(&mut front, &mut back);
    }

    Ok(front)
}
