#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the colorpoint binary.
#[macro_export]
macro_rules! colorpoint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("colorpoint"))
    };
}

/// A temporary working directory, so local config discovery is controlled.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.colorpoint.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".colorpoint.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config adding two extra allowed colors.
pub const EXTRA_COLORS_CONFIG: &str = r#"
[colors]
extra = ["amber", "teal"]
"#;

/// Config shrinking the sampling range to a single point.
pub const DEGENERATE_RANGE_CONFIG: &str = r"
[sampling]
min_coord = 0
max_coord = 0
count = 3
target_equal_pairs = 4
";

/// Config with an inverted coordinate range.
pub const INVALID_RANGE_CONFIG: &str = r"
[sampling]
min_coord = 10
max_coord = -10
";
