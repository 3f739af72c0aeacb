//! rasterfx - Raster image filtering CLI
//!
//! Decodes an image, runs a filter pipeline over it, and encodes the result.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod filters;

#[derive(Parser)]
#[command(name = "rasterfx")]
#[command(author, version, about = "Raster image filtering CLI")]
#[command(long_about = "
Applies a pipeline of image filters to a PNG or JPEG image.

Filters are given as repeated -f flags and run left to right. Each flag
takes a name, optionally followed by a colon and comma-separated
arguments; omitted arguments fall back to their documented defaults.

Examples:
  rasterfx info photo.png                        # Show image info
  rasterfx apply -f blur photo.png soft.png      # 3x3 box blur
  rasterfx apply -f gaussian-blur:5,2 -f binarize:100 in.png out.png
  rasterfx apply -f impulse-noise:0.05 --seed 42 in.png noisy.jpg
  rasterfx apply -f ycbcr -f contrast -f ycbcr-to-rgb in.png out.png
  rasterfx list-filters                          # Filter table
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a filter pipeline over an image
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// List available filters and their arguments
    #[command(name = "list-filters", visible_alias = "ls")]
    ListFilters,
}

#[derive(Args)]
struct ApplyArgs {
    /// Filter to apply, as `name` or `name:arg1,arg2,...` (repeatable)
    #[arg(short = 'f', long = "filter", value_name = "FILTER", required = true)]
    filter: Vec<String>,

    /// Seed for stochastic filters (drawn at random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::ListFilters => commands::list::run(),
    }
}
