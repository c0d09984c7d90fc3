//! Configuration for the `memtiff` command-line tool.
//!
//! The library itself never touches the filesystem; the CLI is the
//! host-side shim that reads a file fully into memory and drives the
//! in-memory API, which makes it a convenient way to inspect or convert
//! TIFF files and to smoke-test the decoder.
//!
//! # Environment Variables
//!
//! - `MEMTIFF_VERBOSE` - Enable debug logging (same as `--verbose`)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default output path for the decode command.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Default orientation code (1 = top-left, the identity).
pub const DEFAULT_ORIENTATION: u16 = 1;

// =============================================================================
// CLI Arguments
// =============================================================================

/// memtiff - decode TIFF images entirely in memory.
#[derive(Parser, Debug, Clone)]
#[command(name = "memtiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print image dimensions and key metadata fields.
    Info(InfoConfig),

    /// Decode an image to an RGBA raster and write it as PNG.
    Decode(DecodeConfig),
}

/// Configuration for the `info` subcommand.
#[derive(Args, Debug, Clone)]
pub struct InfoConfig {
    /// Path to the TIFF file to inspect.
    pub input: PathBuf,

    /// Enable debug logging.
    #[arg(long, env = "MEMTIFF_VERBOSE")]
    pub verbose: bool,
}

/// Configuration for the `decode` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DecodeConfig {
    /// Path to the TIFF file to decode.
    pub input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// TIFF orientation code to apply (1-8).
    #[arg(long, default_value_t = DEFAULT_ORIENTATION)]
    pub orientation: u16,

    /// Enable debug logging.
    #[arg(long, env = "MEMTIFF_VERBOSE")]
    pub verbose: bool,
}
