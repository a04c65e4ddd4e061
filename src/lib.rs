pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod number;
pub mod output;
pub mod point;

pub use error::{ErrorKind, PointError, Result};
pub use number::{Coordinate, Number};
pub use point::{
    AdvancedPoint, AnyPoint, ColorPoint, Colored, Locatable, Point, PointRecord,
    distance_between, sort_by_distance,
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
