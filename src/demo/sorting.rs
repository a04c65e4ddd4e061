use crate::error::Result;
use crate::point::{AnyPoint, sort_by_distance};

use super::PointSampler;

/// Which entity a sorting demo generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Points,
    ColorPoints,
    Mixed,
}

impl SortKind {
    #[must_use]
    pub const fn unsorted_label(self) -> &'static str {
        match self {
            Self::Points => "unsorted points",
            Self::ColorPoints => "random color points:",
            Self::Mixed => "random mixed points:",
        }
    }

    #[must_use]
    pub const fn sorted_label(self) -> &'static str {
        match self {
            Self::Points => "sorted points",
            Self::ColorPoints => "color points in order:",
            Self::Mixed => "mixed points in order:",
        }
    }
}

/// A random collection before and after sorting by distance from the origin.
#[derive(Debug, Clone)]
pub struct SortReport {
    pub kind: SortKind,
    pub unsorted: Vec<AnyPoint>,
    pub sorted: Vec<AnyPoint>,
}

impl SortReport {
    /// Samples `count` points of `kind` and sorts a copy of them.
    ///
    /// # Errors
    /// Propagates validation failures from building validated points.
    pub fn generate(
        kind: SortKind,
        sampler: &mut PointSampler,
        count: usize,
        palette: &[String],
    ) -> Result<Self> {
        let unsorted = match kind {
            SortKind::Points => (0..count).map(|_| sampler.point().into()).collect(),
            SortKind::ColorPoints => (0..count)
                .map(|_| sampler.color_point(palette).into())
                .collect(),
            SortKind::Mixed => (0..count)
                .map(|_| sampler.any_point(palette))
                .collect::<Result<Vec<_>>>()?,
        };

        let mut sorted = unsorted.clone();
        sort_by_distance(&mut sorted);

        Ok(Self {
            kind,
            unsorted,
            sorted,
        })
    }
}

#[cfg(test)]
#[path = "sorting_tests.rs"]
mod tests;
