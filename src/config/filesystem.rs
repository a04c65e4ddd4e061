//! The slice of the filesystem that config discovery touches.
//!
//! [`FileConfigLoader`](super::FileConfigLoader) only reads through this trait,
//! so discovery tests run against an in-memory tree.

use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// # Errors
    /// Any read failure from the underlying store.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Where a local `.colorpoint.toml` is looked for.
    ///
    /// # Errors
    /// When the working directory is gone or unreadable.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Per-user config directory, `None` when the platform has no home.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Disk-backed [`FileSystem`]; the user directory comes from `directories`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))?;
        Some(dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
