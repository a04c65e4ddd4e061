use std::path::{Path, PathBuf};

use crate::error::{PointError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::DemoConfig;

pub const LOCAL_CONFIG_NAME: &str = ".colorpoint.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: DemoConfig,
    /// `None` when no file was found and defaults were used.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default search locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.colorpoint.toml` in the current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `DemoConfig::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<DemoConfig> {
        Ok(toml::from_str(content)?)
    }

    fn read_config(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| PointError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::parse_config(&content)?;
        log::info!("Loaded configuration from {}", path.display());

        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];

        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.read_config(&path);
            }
            log::trace!("No config at {}", path.display());
        }

        log::debug!("No configuration file found, using defaults");
        Ok(LoadResult {
            config: DemoConfig::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
