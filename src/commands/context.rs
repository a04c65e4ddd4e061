use std::path::Path;

use crate::cli::Cli;
use crate::colors;
use crate::config::{ConfigLoader, DemoConfig, FileConfigLoader, validate_config};
use crate::demo::PointSampler;
use crate::error::Result;

/// Settings shared by every command for one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: DemoConfig,
    pub seed: Option<u64>,
    pub quiet: bool,
}

impl RunContext {
    /// Loads and validates the configuration, then registers its extra colors.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref(), cli.no_config)?;
        Self::new(config, cli.seed, cli.quiet)
    }

    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(config: DemoConfig, seed: Option<u64>, quiet: bool) -> Result<Self> {
        validate_config(&config)?;

        for color in &config.colors.extra {
            colors::add_color(color.clone());
        }

        Ok(Self {
            config,
            seed,
            quiet,
        })
    }

    #[must_use]
    pub fn sampler(&self) -> PointSampler {
        PointSampler::from_config(&self.config.sampling, self.seed)
    }
}

/// # Errors
/// Returns an error if an explicit or discovered config file cannot be loaded.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<DemoConfig> {
    if no_config {
        return Ok(DemoConfig::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(result.config)
}
