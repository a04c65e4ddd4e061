use fastrand::Rng;

use crate::colors;
use crate::config::SamplingConfig;
use crate::error::Result;
use crate::point::{AdvancedPoint, AnyPoint, ColorPoint, DEFAULT_RECORD_COLOR, Point};

/// Draws random points with integer coordinates in `[min, max]`.
#[derive(Debug, Clone)]
pub struct PointSampler {
    rng: Rng,
    min: i64,
    max: i64,
}

impl PointSampler {
    /// # Panics
    /// Panics if `min > max`.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        Self::with_rng(Rng::new(), min, max)
    }

    /// Reproducible sampler: the same seed yields the same sequence.
    #[must_use]
    pub fn with_seed(min: i64, max: i64, seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed), min, max)
    }

    #[must_use]
    pub fn from_config(config: &SamplingConfig, seed: Option<u64>) -> Self {
        seed.map_or_else(
            || Self::new(config.min_coord, config.max_coord),
            |seed| Self::with_seed(config.min_coord, config.max_coord, seed),
        )
    }

    fn with_rng(rng: Rng, min: i64, max: i64) -> Self {
        assert!(min <= max, "empty coordinate range {min}..={max}");
        Self { rng, min, max }
    }

    pub fn coordinate(&mut self) -> i64 {
        self.rng.i64(self.min..=self.max)
    }

    pub fn point(&mut self) -> Point {
        Point::new(self.coordinate(), self.coordinate())
    }

    /// A point colored from `palette`, or black when the palette is empty.
    pub fn color_point(&mut self, palette: &[String]) -> ColorPoint {
        let x = self.coordinate();
        let y = self.coordinate();
        let color = self
            .rng
            .choice(palette)
            .map_or(DEFAULT_RECORD_COLOR, String::as_str);
        ColorPoint::new(x, y, color)
    }

    /// A validated point colored from the current allowed set.
    ///
    /// # Errors
    /// Only fails if the allowed set shrinks between the draw and validation,
    /// which the append-only registry rules out.
    pub fn advanced_point(&mut self) -> Result<AdvancedPoint> {
        let x = self.coordinate();
        let y = self.coordinate();
        let allowed = colors::allowed_colors();
        let color = self
            .rng
            .choice(&allowed)
            .map_or(DEFAULT_RECORD_COLOR, String::as_str);
        AdvancedPoint::new(x, y, color)
    }

    /// One of the three point variants, picked uniformly.
    ///
    /// # Errors
    /// See [`PointSampler::advanced_point`].
    pub fn any_point(&mut self, palette: &[String]) -> Result<AnyPoint> {
        Ok(match self.rng.u8(0..3) {
            0 => self.point().into(),
            1 => self.color_point(palette).into(),
            _ => self.advanced_point()?.into(),
        })
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
