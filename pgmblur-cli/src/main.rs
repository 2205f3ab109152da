use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use pgmblur::imgproc::filter::box_blur_fast;
use pgmblur::imgproc::parallel::ExecutionStrategy;
use pgmblur::io::pgm::{read_image_pgm, write_image_pgm};

/// Command line arguments for the blur tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input graymap ("P5") file
    input_path: PathBuf,

    /// Path where the blurred graymap will be saved
    output_path: PathBuf,

    /// Worker threads: -1 runs single-threaded, 0 uses all available cores
    #[arg(allow_negative_numbers = true)]
    num_threads: i32,

    /// Number of box passes approximating the Gaussian
    num_boxes: u32,

    /// Standard deviation of the approximated Gaussian
    #[arg(allow_negative_numbers = true)]
    sigma: f32,
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse and validate command line arguments
    let args = Args::parse();

    let strategy = ExecutionStrategy::try_from(args.num_threads)?;
    if args.num_boxes == 0 {
        anyhow::bail!("Number of boxes must be at least 1");
    }
    if !args.sigma.is_finite() || args.sigma <= 0.0 {
        anyhow::bail!("Sigma must be a positive number, got {}", args.sigma);
    }

    log::info!("Reading image from: {}", args.input_path.display());
    let src = read_image_pgm(&args.input_path)?;
    log::info!(
        "Image dimensions: {}x{}, maxval: {}",
        src.cols(),
        src.rows(),
        src.maxval()
    );

    let now = Instant::now();
    let dst = box_blur_fast(&src, args.sigma, args.num_boxes, strategy)?;
    let elapsed = now.elapsed();

    println!(
        "Time ({} thread(s)): {:.3} ms",
        strategy.thread_count(),
        elapsed.as_secs_f64() * 1000.0
    );

    write_image_pgm(&args.output_path, &dst)?;
    log::info!("Blurred image written to: {}", args.output_path.display());

    Ok(())
}
