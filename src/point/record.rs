use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{PointError, Result};

pub const DEFAULT_RECORD_X: i64 = 10;
pub const DEFAULT_RECORD_Y: i64 = 20;
pub const DEFAULT_RECORD_COLOR: &str = "black";

/// Loosely-typed input for building an [`AdvancedPoint`](super::AdvancedPoint).
///
/// Each field keeps whatever value the caller supplied. Absent fields fall back
/// to `x = 10`, `y = 20`, `color = "black"`. An explicit JSON `null` counts as
/// supplied and fails validation later. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct PointRecord {
    pub x: Option<Value>,
    pub y: Option<Value>,
    pub color: Option<Value>,
}

impl PointRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x(mut self, x: impl Into<Value>) -> Self {
        self.x = Some(x.into());
        self
    }

    #[must_use]
    pub fn with_y(mut self, y: impl Into<Value>) -> Self {
        self.y = Some(y.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Value>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Parse a record from JSON text.
    ///
    /// # Errors
    /// Returns [`PointError::RecordParse`] for malformed JSON and
    /// [`PointError::Type`] when the document is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(PointError::not_an_object("record", &other)),
        }
    }

    /// The `(x, y, color)` triple with defaults applied to absent fields.
    #[must_use]
    pub fn resolve(&self) -> (Value, Value, Value) {
        (
            self.x.clone().unwrap_or_else(|| Value::from(DEFAULT_RECORD_X)),
            self.y.clone().unwrap_or_else(|| Value::from(DEFAULT_RECORD_Y)),
            self.color
                .clone()
                .unwrap_or_else(|| Value::from(DEFAULT_RECORD_COLOR)),
        )
    }
}

impl From<Map<String, Value>> for PointRecord {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            x: map.remove("x"),
            y: map.remove("y"),
            color: map.remove("color"),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
