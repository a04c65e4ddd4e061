mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::EstimateProgress;
pub use text::TextFormatter;

use crate::demo::{Estimate, SortReport, Walkthrough};
use crate::error::Result;

/// Trait for rendering demo results.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_sort(&self, report: &SortReport) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_estimate(&self, estimate: &Estimate) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_walkthrough(&self, walkthrough: &Walkthrough) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_colors(&self, colors: &[String]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
