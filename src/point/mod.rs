//! Point entities and the distance-from-origin ordering they share.
//!
//! [`Point`], [`ColorPoint`] and [`AdvancedPoint`] are independent types that
//! all implement [`Locatable`]. Equality and ordering look only at the distance
//! from the origin, so a colored point equals an uncolored one at the same
//! distance. Equality is exact `f64` comparison with no tolerance.

mod advanced;
mod any;
mod colored;
mod plain;
mod record;

use std::cmp::Ordering;
use std::fmt;

pub use advanced::AdvancedPoint;
pub use any::AnyPoint;
pub use colored::ColorPoint;
pub use plain::Point;
pub use record::{DEFAULT_RECORD_COLOR, DEFAULT_RECORD_X, DEFAULT_RECORD_Y, PointRecord};

use crate::number::Number;

/// Anything with 2D coordinates.
pub trait Locatable {
    fn x(&self) -> Number;

    fn y(&self) -> Number;

    /// Euclidean distance from `(0, 0)`.
    fn distance_orig(&self) -> f64 {
        let x = self.x().as_f64();
        let y = self.y().as_f64();
        (x * x + y * y).sqrt()
    }

    /// `true` if this point lies strictly farther from the origin than `other`.
    fn greater_than(&self, other: &dyn Locatable) -> bool {
        self.distance_orig() > other.distance_orig()
    }

    /// `true` if both points lie at exactly the same distance from the origin.
    #[allow(clippy::float_cmp)]
    fn equals(&self, other: &dyn Locatable) -> bool {
        self.distance_orig() == other.distance_orig()
    }

    /// Total order by distance from the origin, usable for sorting.
    fn cmp_distance(&self, other: &dyn Locatable) -> Ordering {
        self.distance_orig().total_cmp(&other.distance_orig())
    }
}

/// A locatable entity carrying a color label.
pub trait Colored: Locatable {
    fn color(&self) -> &str;
}

/// Stable sort into non-decreasing distance from the origin.
pub fn sort_by_distance<T: Locatable>(points: &mut [T]) {
    points.sort_by(|a, b| a.cmp_distance(b));
}

/// Euclidean distance between any two locatable values.
#[must_use]
pub fn distance_between(p1: &dyn Locatable, p2: &dyn Locatable) -> f64 {
    let dx = p1.x().as_f64() - p2.x().as_f64();
    let dy = p1.y().as_f64() - p2.y().as_f64();
    (dx * dx + dy * dy).sqrt()
}

// Equality and ordering by distance for each concrete point type.
macro_rules! impl_distance_order {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.equals(other)
                }
            }

            impl PartialOrd for $ty {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.distance_orig().partial_cmp(&other.distance_orig())
                }
            }
        )+
    };
}

impl_distance_order!(Point, ColorPoint, AdvancedPoint, AnyPoint);

// `{:?}` prints the same form as `{}`, so collections read `[<1, 2>, <3, 4>]`.
macro_rules! impl_debug_as_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

impl_debug_as_display!(Point, ColorPoint, AdvancedPoint, AnyPoint);

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
