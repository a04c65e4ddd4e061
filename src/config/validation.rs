//! Semantic checks run after a config has been parsed and CLI overrides applied.

use crate::config::DemoConfig;
use crate::{PointError, Result};

/// # Errors
/// Returns [`PointError::Config`] for an inverted coordinate range, a zero
/// sample count or target, or an empty palette.
pub fn validate_config(config: &DemoConfig) -> Result<()> {
    let sampling = &config.sampling;

    if sampling.min_coord > sampling.max_coord {
        return Err(PointError::Config(format!(
            "sampling.min_coord ({}) must not exceed sampling.max_coord ({})",
            sampling.min_coord, sampling.max_coord
        )));
    }

    if sampling.count == 0 {
        return Err(PointError::Config(
            "sampling.count must be at least 1".to_string(),
        ));
    }

    if sampling.target_equal_pairs == 0 {
        return Err(PointError::Config(
            "sampling.target_equal_pairs must be at least 1".to_string(),
        ));
    }

    if config.colors.palette.is_empty() {
        return Err(PointError::Config(
            "colors.palette must list at least one color".to_string(),
        ));
    }

    if let Some(blank) = config.colors.extra.iter().position(|c| c.trim().is_empty()) {
        return Err(PointError::Config(format!(
            "colors.extra[{blank}] cannot be empty"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
