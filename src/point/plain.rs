use std::fmt;

use crate::number::Number;

use super::Locatable;

/// A bare 2D point. Accepts any coordinates without validation.
#[derive(Clone, Copy)]
pub struct Point {
    pub x: Number,
    pub y: Number,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Locatable for Point {
    fn x(&self) -> Number {
        self.x
    }

    fn y(&self) -> Number {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod tests;
