use crate::cli::{ColorsArgs, RecordArgs};
use crate::error::{PointError, Result};
use crate::point::AdvancedPoint;

/// Registers any requested colors, then lists the allowed set.
///
/// # Errors
/// Returns an error for a blank color name or if formatting fails.
pub fn run_colors_impl(args: &ColorsArgs) -> Result<String> {
    for color in &args.add {
        if color.trim().is_empty() {
            return Err(PointError::Config("color names cannot be empty".to_string()));
        }
        if !AdvancedPoint::add_color(color.clone()) {
            log::info!("Color '{color}' is already allowed");
        }
    }

    args.output
        .format
        .formatter()
        .format_colors(&AdvancedPoint::allowed_colors())
}

/// # Errors
/// Returns an error if the record is malformed or fails validation.
pub fn run_record_impl(args: &RecordArgs) -> Result<String> {
    let point = AdvancedPoint::from_json(&args.json)?;
    Ok(format!("{point}\n"))
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
