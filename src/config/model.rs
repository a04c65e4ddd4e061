use serde::{Deserialize, Serialize};

/// Colors the `color-points` demo draws from. Free-form, not validated.
pub const DEFAULT_PALETTE: [&str; 7] = ["red", "blue", "green", "yellow", "black", "white", "purple"];

/// Root configuration for the demonstration CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,

    #[serde(default)]
    pub colors: ColorsConfig,
}

/// Random sampling settings shared by all demos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Smallest random coordinate (inclusive).
    #[serde(default = "default_min_coord")]
    pub min_coord: i64,

    /// Largest random coordinate (inclusive).
    #[serde(default = "default_max_coord")]
    pub max_coord: i64,

    /// Points generated per sorting demo.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Equal-distance pairs to observe before the estimate stops.
    #[serde(default = "default_target_equal_pairs")]
    pub target_equal_pairs: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            min_coord: default_min_coord(),
            max_coord: default_max_coord(),
            count: default_count(),
            target_equal_pairs: default_target_equal_pairs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorsConfig {
    /// Registered as allowed colors at startup, after the built-in set.
    #[serde(default)]
    pub extra: Vec<String>,

    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            extra: Vec::new(),
            palette: default_palette(),
        }
    }
}

const fn default_min_coord() -> i64 {
    -100
}

const fn default_max_coord() -> i64 {
    100
}

const fn default_count() -> usize {
    5
}

const fn default_target_equal_pairs() -> u64 {
    10_000
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
