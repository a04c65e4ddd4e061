use std::fmt;

use crate::number::Number;

use super::{Colored, Locatable};

/// A point with a free-form color label.
///
/// The color takes no part in equality or ordering.
#[derive(Clone)]
pub struct ColorPoint {
    pub x: Number,
    pub y: Number,
    pub color: String,
}

impl ColorPoint {
    #[must_use]
    pub fn new(x: impl Into<Number>, y: impl Into<Number>, color: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            color: color.into(),
        }
    }
}

impl Locatable for ColorPoint {
    fn x(&self) -> Number {
        self.x
    }

    fn y(&self) -> Number {
        self.y
    }
}

impl Colored for ColorPoint {
    fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>({})", self.x, self.y, self.color)
    }
}

#[cfg(test)]
#[path = "colored_tests.rs"]
mod tests;
