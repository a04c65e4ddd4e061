use crate::point::Locatable;

use super::PointSampler;

/// Outcome of the equal-distance Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// Pairs drawn in total.
    pub trials: u64,
    /// Pairs whose two points lie at exactly the same distance from the origin.
    pub equal_pairs: u64,
}

impl Estimate {
    /// Average number of draws per equal-distance pair, i.e. "1 in N".
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn one_in(&self) -> Option<f64> {
        (self.equal_pairs > 0).then(|| self.trials as f64 / self.equal_pairs as f64)
    }
}

/// Draws pairs of random points until `target` pairs with equal distance from
/// the origin have been seen.
///
/// `on_match` receives the running count after each equal pair. A `target` of
/// zero returns immediately without drawing.
pub fn estimate_equal_distance(
    sampler: &mut PointSampler,
    target: u64,
    mut on_match: impl FnMut(u64),
) -> Estimate {
    let mut estimate = Estimate {
        trials: 0,
        equal_pairs: 0,
    };

    while estimate.equal_pairs < target {
        let p1 = sampler.point();
        let p2 = sampler.point();
        estimate.trials += 1;

        if p1.equals(&p2) {
            estimate.equal_pairs += 1;
            on_match(estimate.equal_pairs);
        }
    }

    log::debug!(
        "Estimate finished: {} equal pairs in {} trials",
        estimate.equal_pairs,
        estimate.trials
    );
    estimate
}

#[cfg(test)]
#[path = "estimate_tests.rs"]
mod tests;
