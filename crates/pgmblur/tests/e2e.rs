use pgmblur::image::{GrayImage, ImageSize};
use pgmblur::imgproc::filter::{box_blur_fast, BlurError};
use pgmblur::imgproc::parallel::ExecutionStrategy;
use pgmblur::io::pgm::{decode_pgm, encode_pgm, read_image_pgm, write_image_pgm};

fn impulse_image(width: usize, height: usize, x: usize, y: usize) -> GrayImage {
    let mut data = vec![0u8; width * height];
    data[y * width + x] = 255;
    GrayImage::new(ImageSize { width, height }, 255, data).unwrap()
}

#[test]
fn blur_4x4_impulse() -> Result<(), BlurError> {
    let src = impulse_image(4, 4, 1, 1);

    // sigma 1.0 over a single box gives radius 4, so every window covers
    // the whole image and the impulse energy spreads evenly
    let dst = box_blur_fast(&src, 1.0, 1, ExecutionStrategy::Serial)?;

    assert_eq!(dst.as_slice(), &[16; 16]);
    assert!(dst.get_pixel(1, 1)? < 255);
    assert!(dst.get_pixel(0, 1)? > 0);
    assert!(dst.get_pixel(2, 1)? > 0);
    assert!(dst.get_pixel(1, 0)? > 0);
    assert!(dst.get_pixel(1, 2)? > 0);

    // the source keeps its single bright pixel
    assert_eq!(src.get_pixel(1, 1)?, 255);
    assert_eq!(src.as_slice().iter().map(|&v| u32::from(v)).sum::<u32>(), 255);

    Ok(())
}

#[test]
fn blur_8x8_impulse_grid() -> Result<(), BlurError> {
    let src = impulse_image(8, 8, 3, 3);

    let dst = box_blur_fast(&src, 0.5, 3, ExecutionStrategy::Serial)?;

    // radius 1; the clamped borders keep the top-left side slightly
    // brighter than the bottom-right one
    #[rustfmt::skip]
    let expected = [
        1, 2,  3,  4,  3, 2, 1, 0,
        2, 3,  6,  7,  6, 3, 1, 0,
        3, 6, 13, 15, 13, 6, 2, 0,
        4, 7, 15, 17, 15, 7, 2, 0,
        3, 6, 13, 15, 13, 6, 2, 0,
        2, 3,  6,  7,  6, 3, 1, 0,
        1, 1,  2,  2,  2, 1, 0, 0,
        0, 0,  0,  0,  0, 0, 0, 0,
    ];
    assert_eq!(dst.as_slice(), &expected);

    Ok(())
}

#[test]
fn blur_pipeline_through_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;

    let input_path = tmp_dir.path().join("impulse.pgm");
    let output_path = tmp_dir.path().join("impulse-blur.pgm");

    write_image_pgm(&input_path, &impulse_image(8, 8, 3, 3))?;

    let src = read_image_pgm(&input_path)?;
    let dst = box_blur_fast(&src, 0.5, 3, ExecutionStrategy::AllCores)?;
    write_image_pgm(&output_path, &dst)?;

    let back = read_image_pgm(&output_path)?;
    assert_eq!(back.size(), src.size());
    assert_eq!(back.maxval(), src.maxval());
    assert_eq!(back.as_slice(), dst.as_slice());

    Ok(())
}

#[test]
fn blur_strategies_agree_end_to_end() -> Result<(), BlurError> {
    let src = impulse_image(16, 12, 5, 7);
    let serial = box_blur_fast(&src, 1.5, 3, ExecutionStrategy::Serial)?;

    for strategy in [
        ExecutionStrategy::AllCores,
        ExecutionStrategy::Fixed(2),
        ExecutionStrategy::Fixed(8),
    ] {
        let parallel = box_blur_fast(&src, 1.5, 3, strategy)?;
        assert_eq!(parallel.as_slice(), serial.as_slice());
    }

    Ok(())
}

#[test]
fn blurred_bytes_survive_the_codec() -> Result<(), Box<dyn std::error::Error>> {
    let src = impulse_image(5, 5, 2, 2);
    let dst = box_blur_fast(&src, 0.5, 3, ExecutionStrategy::Serial)?;

    let decoded = decode_pgm(&encode_pgm(&dst))?;
    assert_eq!(decoded.as_slice(), dst.as_slice());
    assert_eq!(decoded.maxval(), dst.maxval());

    Ok(())
}
