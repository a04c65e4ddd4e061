use std::fs;

use crate::cli::InitArgs;
use crate::{PointError, Result};

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<String> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PointError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    Ok(format!(
        "Created configuration file: {}\n",
        output_path.display()
    ))
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# colorpoint configuration file

[sampling]
# Inclusive range for random integer coordinates (default: -100..=100)
min_coord = -100
max_coord = 100

# Points generated by the sorting demos (default: 5)
count = 5

# Equal-distance pairs the estimate waits for (default: 10000)
target_equal_pairs = 10000

[colors]
# Registered as allowed colors at startup, after red/green/blue/black/white
extra = []

# Labels the color-points demo picks from (not validated)
palette = ["red", "blue", "green", "yellow", "black", "white", "purple"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
