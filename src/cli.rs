use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "colorpoint")]
#[command(author, version, about = "2D points with colors, distance ordering and validated palettes")]
#[command(long_about = "Demonstrates point value objects: plain points, colored points and \
    validated points whose color must be registered.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Validation error (non-numeric coordinate or unregistered color)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Seed for reproducible random points
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort random plain points by distance from the origin
    Points(SortArgs),

    /// Sort random colored points by distance from the origin
    ColorPoints(SortArgs),

    /// Sort a random mix of all point kinds
    Mixed(SortArgs),

    /// Walk through validated points: add a color, recolor, measure, build from a record
    Advanced(FormatArgs),

    /// Estimate how often two random points lie at the same distance from the origin
    Estimate(EstimateArgs),

    /// List allowed colors, optionally registering new ones first
    Colors(ColorsArgs),

    /// Build a validated point from a JSON record
    Record(RecordArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct SortArgs {
    /// Number of points to generate (overrides config)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Parser, Debug)]
pub struct EstimateArgs {
    /// Equal-distance pairs to observe before stopping (overrides config)
    #[arg(short, long)]
    pub target: Option<u64>,

    /// Smallest random coordinate (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub min_coord: Option<i64>,

    /// Largest random coordinate (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub max_coord: Option<i64>,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Parser, Debug)]
pub struct ColorsArgs {
    /// Register a color before listing (can be specified multiple times)
    #[arg(long = "add", short = 'a')]
    pub add: Vec<String>,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// JSON object with optional keys "x", "y" and "color"
    pub json: String,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".colorpoint.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
