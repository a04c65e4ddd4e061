use std::fmt;

use crate::number::Number;

use super::{AdvancedPoint, ColorPoint, Colored, Locatable, Point};

/// Any of the three point entities, for mixed collections.
#[derive(Clone)]
pub enum AnyPoint {
    Plain(Point),
    Colored(ColorPoint),
    Validated(AdvancedPoint),
}

impl AnyPoint {
    /// The color label, if this variant has one.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Colored(point) => Some(Colored::color(point)),
            Self::Validated(point) => Some(Colored::color(point)),
        }
    }

    fn as_locatable(&self) -> &dyn Locatable {
        match self {
            Self::Plain(point) => point,
            Self::Colored(point) => point,
            Self::Validated(point) => point,
        }
    }
}

impl Locatable for AnyPoint {
    fn x(&self) -> Number {
        self.as_locatable().x()
    }

    fn y(&self) -> Number {
        self.as_locatable().y()
    }
}

impl fmt::Display for AnyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(point) => fmt::Display::fmt(point, f),
            Self::Colored(point) => fmt::Display::fmt(point, f),
            Self::Validated(point) => fmt::Display::fmt(point, f),
        }
    }
}

impl From<Point> for AnyPoint {
    fn from(point: Point) -> Self {
        Self::Plain(point)
    }
}

impl From<ColorPoint> for AnyPoint {
    fn from(point: ColorPoint) -> Self {
        Self::Colored(point)
    }
}

impl From<AdvancedPoint> for AnyPoint {
    fn from(point: AdvancedPoint) -> Self {
        Self::Validated(point)
    }
}

#[cfg(test)]
#[path = "any_tests.rs"]
mod tests;
