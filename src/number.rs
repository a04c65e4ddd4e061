//! Numeric coordinates.
//!
//! A coordinate is either an integer or a real. Geometry always runs in `f64`;
//! the variant only survives for rendering, so `1` and `1.0` print differently.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{PointError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// Interpret a loosely-typed value as a coordinate.
    ///
    /// JSON integers that fit in `i64` stay integers; every other JSON number
    /// becomes a real. Booleans are not numbers here.
    ///
    /// # Errors
    /// Returns [`PointError::Type`] naming `field` for any non-numeric value.
    pub fn from_value(field: &str, value: &Value) -> Result<Self> {
        let Value::Number(number) = value else {
            return Err(PointError::not_a_number(field, value));
        };

        if let Some(int) = number.as_i64() {
            return Ok(Self::Int(int));
        }

        number
            .as_f64()
            .map(Self::Float)
            .ok_or_else(|| PointError::not_a_number(field, value))
    }
}

/// Reals at or beyond this magnitude render in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e16;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_finite() && value.abs() >= EXPONENT_THRESHOLD => {
                write_exponent(f, value)
            }
            // Whole reals keep a trailing ".0" so they read as reals.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Writes `1e300` as `1e+300`.
fn write_exponent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&rendered),
    }
}

/// Input for a validated coordinate.
///
/// Native numbers are taken as they are, infinities and NaN included. Anything
/// else is kept as a loose value and checked when the point is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    Number(Number),
    Loose(Value),
}

impl Coordinate {
    /// # Errors
    /// Returns [`PointError::Type`] naming `field` if the value is not numeric.
    pub fn into_number(self, field: &str) -> Result<Number> {
        match self {
            Self::Number(number) => Ok(number),
            Self::Loose(value) => Number::from_value(field, &value),
        }
    }
}

impl From<Number> for Coordinate {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_native_coordinate {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Coordinate {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_native_coordinate!(i32, i64, f32, f64);

impl From<Value> for Coordinate {
    fn from(value: Value) -> Self {
        Self::Loose(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self::Loose(Value::from(value))
    }
}

impl From<String> for Coordinate {
    fn from(value: String) -> Self {
        Self::Loose(Value::from(value))
    }
}

impl From<bool> for Coordinate {
    fn from(value: bool) -> Self {
        Self::Loose(Value::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(value) => Self::from(value),
            Number::Float(value) => Self::from(value),
        }
    }
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
