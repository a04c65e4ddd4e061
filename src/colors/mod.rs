mod registry;

pub use registry::{
    ColorRegistry, DEFAULT_COLORS, add_color, allowed_colors, is_allowed, validate_color,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
