use serde::Serialize;

use crate::demo::{Estimate, SortReport, Walkthrough};
use crate::error::Result;
use crate::number::Number;
use crate::point::{AnyPoint, Locatable};

use super::OutputFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonPoint<'a> {
    x: Number,
    y: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    distance: f64,
}

impl<'a> From<&'a AnyPoint> for JsonPoint<'a> {
    fn from(point: &'a AnyPoint) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            color: point.color(),
            distance: point.distance_orig(),
        }
    }
}

#[derive(Serialize)]
struct JsonSortReport<'a> {
    unsorted: Vec<JsonPoint<'a>>,
    sorted: Vec<JsonPoint<'a>>,
}

#[derive(Serialize)]
struct JsonEstimate {
    trials: u64,
    equal_pairs: u64,
    one_in: Option<f64>,
}

#[derive(Serialize)]
struct JsonWalkthrough {
    distance: f64,
    from_record: String,
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

impl OutputFormatter for JsonFormatter {
    fn format_sort(&self, report: &SortReport) -> Result<String> {
        to_pretty(&JsonSortReport {
            unsorted: report.unsorted.iter().map(JsonPoint::from).collect(),
            sorted: report.sorted.iter().map(JsonPoint::from).collect(),
        })
    }

    fn format_estimate(&self, estimate: &Estimate) -> Result<String> {
        to_pretty(&JsonEstimate {
            trials: estimate.trials,
            equal_pairs: estimate.equal_pairs,
            one_in: estimate.one_in(),
        })
    }

    fn format_walkthrough(&self, walkthrough: &Walkthrough) -> Result<String> {
        to_pretty(&JsonWalkthrough {
            distance: walkthrough.distance,
            from_record: walkthrough.from_record.to_string(),
        })
    }

    fn format_colors(&self, colors: &[String]) -> Result<String> {
        to_pretty(&colors)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
