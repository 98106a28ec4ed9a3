//! rasterlab CLI - Low-pass filtering and grayscale morphology on image files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use rasterlab::io::{
    DEFAULT_JPEG_QUALITY, ImageFormat, detect_format, read_image, write_image_with_quality,
};
use rasterlab::{FilterKind, LowPassParams, MorphOp, Operation, Raster, StructShape, process};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rasterlab")]
#[command(author, version, about = "Raster filtering and grayscale morphology", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about an image file
    Info {
        /// Input image (PNG or JPEG)
        input: PathBuf,
    },
    /// Low-pass smoothing filter
    Lowpass {
        /// Input image (PNG or JPEG)
        input: PathBuf,
        /// Output file; JPEG for .jpg/.jpeg, PNG otherwise
        output: PathBuf,
        /// Filter: gaussian, average, median
        #[arg(short, long, default_value = "gaussian")]
        filter: FilterKind,
        /// Kernel size (odd, typically 3..=15)
        #[arg(short, long, default_value = "3")]
        size: u32,
        /// Gaussian sigma (typically 0.1..=5.0)
        #[arg(long, default_value = "1.0")]
        sigma: f64,
        /// JPEG quality (1..=100)
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,
    },
    /// Grayscale morphology (input is reduced to gray first)
    Morph {
        /// Input image (PNG or JPEG)
        input: PathBuf,
        /// Output file; JPEG for .jpg/.jpeg, PNG otherwise
        output: PathBuf,
        /// Operation: erosion, dilation, opening, closing
        #[arg(short, long, default_value = "erosion")]
        op: MorphOp,
        /// Structuring element: square3, square5, disk, cross (unknown names use square3)
        #[arg(long, default_value = "square3")]
        shape: String,
        /// JPEG quality (1..=100)
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Raster> {
    let raster = read_image(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    info!(
        "Input: {} x {}, {} channel(s)",
        raster.width(),
        raster.height(),
        raster.channel_count()
    );
    Ok(raster)
}

fn output_format(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Some(ImageFormat::Jpeg) => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    }
}

fn write_output(raster: &Raster, path: &Path, quality: u8) -> Result<()> {
    let format = output_format(path);
    write_image_with_quality(raster, path, format, quality)
        .with_context(|| format!("Failed to write {} output {}", format, path.display()))
}

fn run(input: &Path, output: &Path, operation: &Operation, quality: u8) -> Result<()> {
    let raster = read_input(input)?;
    let start = Instant::now();
    let result = process(&raster, operation).with_context(|| format!("Failed to apply {operation}"))?;
    let elapsed = start.elapsed();
    write_output(&result, output, quality)?;
    done(operation, output, elapsed);
    Ok(())
}

fn done(operation: &Operation, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", operation, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

/// Min, max and mean of every channel
fn channel_stats(raster: &Raster) -> Vec<(u8, u8, f64)> {
    let nc = raster.channel_count() as usize;
    let n = (raster.width() as usize * raster.height() as usize) as f64;
    (0..nc)
        .map(|c| {
            let mut min = u8::MAX;
            let mut max = u8::MIN;
            let mut sum = 0u64;
            for &s in raster.data().iter().skip(c).step_by(nc) {
                min = min.min(s);
                max = max.max(s);
                sum += s as u64;
            }
            (min, max, sum as f64 / n)
        })
        .collect()
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Info { input } => {
            let format = detect_format(&input)
                .with_context(|| format!("Failed to identify {}", input.display()))?;
            let raster = read_input(&input)?;

            println!("File: {}", input.display());
            println!("Format: {}", format);
            println!(
                "Dimensions: {} x {} ({} pixels)",
                raster.width(),
                raster.height(),
                raster.width() as u64 * raster.height() as u64
            );
            println!("Channels: {:?}", raster.channels());
            println!("\nStatistics:");
            let names: &[&str] = if raster.channels().is_gray() {
                &["Gray"]
            } else {
                &["Red", "Green", "Blue"]
            };
            for (name, (min, max, mean)) in names.iter().zip(channel_stats(&raster)) {
                println!("  {}: min {} max {} mean {:.2}", name, min, max, mean);
            }
        }

        Commands::Lowpass {
            input,
            output,
            filter,
            size,
            sigma,
            quality,
        } => {
            let operation = Operation::LowPass(LowPassParams {
                kind: filter,
                kernel_size: size,
                sigma,
            });
            run(&input, &output, &operation, quality)?;
        }

        Commands::Morph {
            input,
            output,
            op,
            shape,
            quality,
        } => {
            let shape = StructShape::from_name_or_default(&shape);
            let operation = Operation::Morphology { op, shape };
            run(&input, &output, &operation, quality)?;
        }
    }

    Ok(())
}
