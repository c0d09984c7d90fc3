//! memtiff - decode TIFF images entirely in memory.
//!
//! The binary is the host-side shim around the in-memory library: it reads
//! the input file fully into a buffer, then everything downstream works
//! exactly as it would in a filesystem-less embedding.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memtiff::{
    config::{Cli, Command, DecodeConfig, InfoConfig},
    install_sinks, tags, Orientation, TiffHandle,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Route engine diagnostics to stderr for the lifetime of the process.
    install_sinks(
        Box::new(|module, message| eprintln!("error ({module}): {message}")),
        Box::new(|module, message| eprintln!("warning ({module}): {message}")),
    );

    match cli.command {
        Command::Info(config) => run_info(config),
        Command::Decode(config) => run_decode(config),
    }
}

// =============================================================================
// Info Command
// =============================================================================

fn run_info(config: InfoConfig) -> ExitCode {
    init_logging(config.verbose);

    let buffer = match std::fs::read(&config.input) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("Failed to read {}: {}", config.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut handle = match TiffHandle::open(buffer) {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to open {}: {}", config.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let (width, height) = match handle.dimensions() {
        Ok(dimensions) => dimensions,
        Err(e) => {
            error!("Failed to read dimensions: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", config.input.display());
    println!("  Dimensions:      {}x{}", width, height);
    println!(
        "  Bits/sample:     {}",
        handle.field_u16(tags::BITS_PER_SAMPLE)
    );
    println!(
        "  Samples/pixel:   {}",
        handle.field_u16(tags::SAMPLES_PER_PIXEL)
    );
    println!("  Compression:     {}", handle.field_u16(tags::COMPRESSION));
    println!(
        "  Photometric:     {}",
        handle.field_u16(tags::PHOTOMETRIC_INTERPRETATION)
    );
    println!("  Orientation:     {}", handle.field_u16(tags::ORIENTATION));
    println!(
        "  Rows/strip:      {}",
        handle.field_u32(tags::ROWS_PER_STRIP)
    );

    handle.close();
    ExitCode::SUCCESS
}

// =============================================================================
// Decode Command
// =============================================================================

fn run_decode(config: DecodeConfig) -> ExitCode {
    init_logging(config.verbose);

    let orientation = match Orientation::from_code(config.orientation) {
        Some(orientation) => orientation,
        None => {
            error!(
                "Invalid orientation code {} (expected 1-8)",
                config.orientation
            );
            return ExitCode::FAILURE;
        }
    };

    let buffer = match std::fs::read(&config.input) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("Failed to read {}: {}", config.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut handle = match TiffHandle::open(buffer) {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to open {}: {}", config.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let raster = match handle.decode_rgba(orientation) {
        Ok(raster) => raster,
        Err(e) => {
            error!("Decode failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    handle.close();

    let (width, height) = (raster.width, raster.height);
    let image = match image::RgbaImage::from_raw(width, height, raster.pixels) {
        Some(image) => image,
        None => {
            error!("Decoded raster does not match its dimensions");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = image.save_with_format(&config.output, image::ImageFormat::Png) {
        error!("Failed to write {}: {}", config.output.display(), e);
        return ExitCode::FAILURE;
    }

    println!("Wrote {} ({}x{})", config.output.display(), width, height);
    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose { "memtiff=debug" } else { "memtiff=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
