//! Library side of the demonstration CLI: random sampling, the equal-distance
//! estimate, and the scripted walkthrough of validated points.

mod estimate;
mod sampler;
mod sorting;
mod walkthrough;

pub use estimate::{Estimate, estimate_equal_distance};
pub use sampler::PointSampler;
pub use sorting::{SortKind, SortReport};
pub use walkthrough::{Walkthrough, run_walkthrough};
