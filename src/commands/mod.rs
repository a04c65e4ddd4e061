pub mod colors;
pub mod context;
pub mod demo;
pub mod init;

pub use colors::{run_colors_impl, run_record_impl};
pub use context::{RunContext, load_config};
pub use demo::{run_advanced_impl, run_estimate_impl, run_sort_impl};
pub use init::{generate_config_template, run_init_impl};

use crate::cli::{Cli, Commands};
use crate::demo::SortKind;
use crate::error::{PointError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_ERROR};

/// Runs the selected command, prints its output and returns the exit code.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            exit_code_for(&e)
        }
    }
}

/// # Errors
/// Returns whatever the selected command fails with.
pub fn run_impl(cli: &Cli) -> Result<String> {
    if let Commands::Init(args) = &cli.command {
        return run_init_impl(args);
    }

    let ctx = RunContext::from_cli(cli)?;

    match &cli.command {
        Commands::Points(args) => run_sort_impl(SortKind::Points, args, &ctx),
        Commands::ColorPoints(args) => run_sort_impl(SortKind::ColorPoints, args, &ctx),
        Commands::Mixed(args) => run_sort_impl(SortKind::Mixed, args, &ctx),
        Commands::Advanced(args) => run_advanced_impl(args),
        Commands::Estimate(args) => run_estimate_impl(args, &ctx),
        Commands::Colors(args) => run_colors_impl(args),
        Commands::Record(args) => run_record_impl(args),
        Commands::Init(args) => run_init_impl(args),
    }
}

#[must_use]
pub const fn exit_code_for(error: &PointError) -> i32 {
    if error.is_validation() {
        EXIT_VALIDATION_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

fn report_error(error: &PointError) {
    log::debug!("{} error: {error:?}", error.kind());
    eprintln!("Error: {error}");
    if let Some(suggestion) = error.suggestion() {
        eprintln!("  = help: {suggestion}");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
