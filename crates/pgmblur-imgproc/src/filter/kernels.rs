/// Compute the box radius approximating a Gaussian of standard deviation
/// `sigma` with `num_boxes` successive box passes.
///
/// The radius follows `round(sqrt(12 * sigma^2 / num_boxes + 1))`, the
/// variance-matching rule for iterated box filters. Every pass shares the
/// same radius.
///
/// # Arguments
///
/// * `sigma` - Standard deviation of the approximated Gaussian.
/// * `num_boxes` - Number of box passes the approximation is built from.
///
/// # Returns
///
/// The window half-width in pixels.
pub fn box_radius(sigma: f32, num_boxes: u32) -> usize {
    let sigma = f64::from(sigma);
    let width = (12.0 * sigma * sigma / f64::from(num_boxes) + 1.0).sqrt();
    width.round() as usize
}
