use crate::cli::{EstimateArgs, FormatArgs, SortArgs};
use crate::config::validate_config;
use crate::demo::{PointSampler, SortKind, SortReport, estimate_equal_distance, run_walkthrough};
use crate::error::Result;
use crate::output::EstimateProgress;

use super::RunContext;

/// Generates, sorts and formats a random collection.
///
/// # Errors
/// Returns an error if the count override is invalid or formatting fails.
pub fn run_sort_impl(kind: SortKind, args: &SortArgs, ctx: &RunContext) -> Result<String> {
    let mut config = ctx.config.clone();
    if let Some(count) = args.count {
        config.sampling.count = count;
    }
    validate_config(&config)?;

    let mut sampler = ctx.sampler();
    let report = SortReport::generate(
        kind,
        &mut sampler,
        config.sampling.count,
        &config.colors.palette,
    )?;

    args.output.format.formatter().format_sort(&report)
}

/// Runs the equal-distance estimate with a progress bar on stderr.
///
/// # Errors
/// Returns an error if the overrides make the config invalid.
pub fn run_estimate_impl(args: &EstimateArgs, ctx: &RunContext) -> Result<String> {
    let mut config = ctx.config.clone();
    if let Some(target) = args.target {
        config.sampling.target_equal_pairs = target;
    }
    if let Some(min) = args.min_coord {
        config.sampling.min_coord = min;
    }
    if let Some(max) = args.max_coord {
        config.sampling.max_coord = max;
    }
    validate_config(&config)?;

    let target = config.sampling.target_equal_pairs;
    log::info!(
        "Sampling pairs in [{}, {}] until {target} equal distances",
        config.sampling.min_coord,
        config.sampling.max_coord
    );

    let mut sampler = PointSampler::from_config(&config.sampling, ctx.seed);
    let progress = EstimateProgress::new(target, ctx.quiet);
    let estimate = estimate_equal_distance(&mut sampler, target, |found| progress.set_found(found));
    progress.finish();

    args.output.format.formatter().format_estimate(&estimate)
}

/// # Errors
/// Returns an error if a walkthrough step fails validation.
pub fn run_advanced_impl(args: &FormatArgs) -> Result<String> {
    let walkthrough = run_walkthrough()?;
    args.format.formatter().format_walkthrough(&walkthrough)
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
