use std::fmt;

use serde_json::{Map, Value};

use crate::colors;
use crate::error::Result;
use crate::number::{Coordinate, Number};

use super::{Colored, Locatable, PointRecord};

/// A colored point whose coordinates are validated and whose color must be
/// registered in the process-wide allowed set.
///
/// Coordinates are read-only once built. The color can change through
/// [`AdvancedPoint::set_color`], which validates again against the set as it
/// stands at that moment.
#[derive(Clone)]
pub struct AdvancedPoint {
    x: Number,
    y: Number,
    color: String,
}

impl AdvancedPoint {
    /// Builds a validated point. Coordinates may be native numbers or loose
    /// JSON values.
    ///
    /// Checks `x`, then `y`, then `color`, and stops at the first failure.
    ///
    /// # Errors
    /// - [`PointError::Type`](crate::PointError::Type) if `x` or `y` is not numeric.
    /// - [`PointError::Value`](crate::PointError::Value) if `color` is not currently allowed.
    pub fn new(
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        color: impl Into<Value>,
    ) -> Result<Self> {
        let x = Coordinate::into_number(x.into(), "x")?;
        let y = Coordinate::into_number(y.into(), "y")?;
        let color = colors::validate_color(&color.into())?;
        Ok(Self { x, y, color })
    }

    #[must_use]
    pub const fn x(&self) -> Number {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> Number {
        self.y
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replaces the color. The point is left untouched on failure.
    ///
    /// # Errors
    /// Returns [`PointError::Value`](crate::PointError::Value) if `new_color`
    /// is not currently allowed.
    pub fn set_color(&mut self, new_color: impl Into<Value>) -> Result<()> {
        self.color = colors::validate_color(&new_color.into())?;
        Ok(())
    }

    /// Registers a new allowed color for every `AdvancedPoint` in the process.
    ///
    /// Returns `false` if the color was already allowed.
    pub fn add_color(new_color: impl Into<String>) -> bool {
        colors::add_color(new_color)
    }

    /// Current allowed colors, in registration order.
    #[must_use]
    pub fn allowed_colors() -> Vec<String> {
        colors::allowed_colors()
    }

    #[must_use]
    pub fn distance_between(p1: &dyn Locatable, p2: &dyn Locatable) -> f64 {
        super::distance_between(p1, p2)
    }

    /// Builds a point from a record, filling absent fields with defaults.
    ///
    /// # Errors
    /// Same as [`AdvancedPoint::new`].
    pub fn from_record(record: &PointRecord) -> Result<Self> {
        let (x, y, color) = record.resolve();
        Self::new(x, y, color)
    }

    /// # Errors
    /// Same as [`AdvancedPoint::new`].
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        Self::from_record(&PointRecord::from(map.clone()))
    }

    /// # Errors
    /// Fails on malformed JSON, on a document that is not an object, and on
    /// anything [`AdvancedPoint::new`] rejects.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_record(&PointRecord::from_json(text)?)
    }
}

impl Locatable for AdvancedPoint {
    fn x(&self) -> Number {
        self.x
    }

    fn y(&self) -> Number {
        self.y
    }
}

impl Colored for AdvancedPoint {
    fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for AdvancedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>({})", self.x, self.y, self.color)
    }
}

#[cfg(test)]
#[path = "advanced_tests.rs"]
mod tests;
