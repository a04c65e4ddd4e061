use std::fmt::{Display, Write};

use crate::demo::{Estimate, SortReport, Walkthrough};
use crate::error::Result;
use crate::number::Number;

use super::OutputFormatter;

/// Plain-text output matching how collections print in the demos:
/// `[<1, 2>, <3,4>(red)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

/// Renders items as a bracketed, comma-separated list.
#[must_use]
pub fn format_list<T: Display>(items: &[T]) -> String {
    let mut output = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{item}");
    }
    output.push(']');
    output
}

impl OutputFormatter for TextFormatter {
    fn format_sort(&self, report: &SortReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "{}", report.kind.unsorted_label());
        let _ = writeln!(output, "{}", format_list(&report.unsorted));
        let _ = writeln!(output, "{}", report.kind.sorted_label());
        let _ = writeln!(output, "{}", format_list(&report.sorted));
        Ok(output)
    }

    fn format_estimate(&self, estimate: &Estimate) -> Result<String> {
        Ok(estimate.one_in().map_or_else(
            || "no equal-distance pairs observed\n".to_string(),
            |ratio| format!("probability is 1 in {} \n", Number::from(ratio)),
        ))
    }

    fn format_walkthrough(&self, walkthrough: &Walkthrough) -> Result<String> {
        Ok(format!(
            "{}\n{}\n",
            walkthrough.distance, walkthrough.from_record
        ))
    }

    fn format_colors(&self, colors: &[String]) -> Result<String> {
        let mut output = String::new();
        for color in colors {
            let _ = writeln!(output, "{color}");
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
