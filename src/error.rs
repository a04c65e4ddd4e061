use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`PointError`].
///
/// `Type` and `Value` are the two validation failures raised by
/// [`AdvancedPoint`](crate::point::AdvancedPoint); the rest come from the
/// CLI's config and record handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
    Config,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type => "TypeError",
            Self::Value => "ValueError",
            Self::Config => "ConfigError",
            Self::Io => "IOError",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PointError {
    #[error("{field} must be {expected}")]
    Type {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("color must be one of: {allowed:?}")]
    Value { color: String, allowed: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid point record: {0}")]
    RecordParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PointError {
    pub(crate) fn not_a_number(field: &str, found: &serde_json::Value) -> Self {
        Self::Type {
            field: field.to_string(),
            expected: "a number",
            found: found.to_string(),
        }
    }

    pub(crate) fn not_an_object(field: &str, found: &serde_json::Value) -> Self {
        Self::Type {
            field: field.to_string(),
            expected: "a JSON object",
            found: found.to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Value { .. } => ErrorKind::Value,
            Self::Config(_) | Self::TomlParse(_) | Self::RecordParse(_) => ErrorKind::Config,
            Self::FileAccess { .. } | Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns `true` for the validation failures raised by point construction.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Type | ErrorKind::Value)
    }

    /// Get a hint for fixing the error, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Type {
                expected: "a number",
                found,
                ..
            } => Some(format!("Coordinates must be integers or reals, got {found}")),
            Self::Type { .. } => None,
            Self::Value { color, .. } => Some(format!(
                "Register '{color}' with `colorpoint colors --add {color}` or pick an allowed color"
            )),
            Self::Config(_) => Some("Check the config file format and values".to_string()),
            Self::TomlParse(_) => Some("Check TOML syntax: quotes, brackets, tables".to_string()),
            Self::RecordParse(_) => {
                Some("Records are JSON objects, e.g. {\"x\": 1, \"color\": \"red\"}".to_string())
            }
            Self::FileAccess { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists".to_string()),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check file permissions".to_string())
                }
                _ => None,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PointError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
