use crate::error::Result;
use crate::point::{AdvancedPoint, PointRecord};

/// Color registered at the start of the walkthrough.
pub const WALKTHROUGH_COLOR: &str = "amber";

/// Everything the scripted validated-point walkthrough produced.
#[derive(Debug, Clone)]
pub struct Walkthrough {
    pub first: AdvancedPoint,
    pub second: AdvancedPoint,
    pub distance: f64,
    pub from_record: AdvancedPoint,
}

/// Registers "amber", builds `(1, 2, amber)` and recolors it blue, measures
/// its distance to `(-1, -2, blue)`, then builds a point from `{"x": 44}`.
///
/// # Errors
/// Propagates any validation failure; none occur with the built-in colors.
pub fn run_walkthrough() -> Result<Walkthrough> {
    AdvancedPoint::add_color(WALKTHROUGH_COLOR);

    let mut first = AdvancedPoint::new(1, 2, WALKTHROUGH_COLOR)?;
    log::info!("Built {first}");
    first.set_color("blue")?;
    log::info!("Recolored to {first}");

    let second = AdvancedPoint::new(-1, -2, "blue")?;
    let distance = AdvancedPoint::distance_between(&first, &second);

    let from_record = AdvancedPoint::from_record(&PointRecord::new().with_x(44))?;

    Ok(Walkthrough {
        first,
        second,
        distance,
        from_record,
    })
}
