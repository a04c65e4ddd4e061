use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::{PointError, Result};

/// Colors every process starts with, in registration order.
pub const DEFAULT_COLORS: [&str; 5] = ["red", "green", "blue", "black", "white"];

/// Ordered set of allowed color labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRegistry {
    colors: IndexSet<String>,
}

impl ColorRegistry {
    /// Creates an empty registry. Use `default()` for the built-in colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: IndexSet::new(),
        }
    }

    /// Appends a color. Returns `false` if it was already registered.
    pub fn add(&mut self, color: impl Into<String>) -> bool {
        self.colors.insert(color.into())
    }

    #[must_use]
    pub fn contains(&self, color: &str) -> bool {
        self.colors.contains(color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.colors.iter().cloned().collect()
    }

    /// # Errors
    /// Returns [`PointError::Value`] if `color` is not registered.
    pub fn check(&self, color: &str) -> Result<()> {
        if self.contains(color) {
            Ok(())
        } else {
            Err(self.rejection(color.to_string()))
        }
    }

    /// Validates a loosely-typed color and returns it as an owned label.
    ///
    /// Non-string values can never be members, so they fail the same way an
    /// unknown label does.
    ///
    /// # Errors
    /// Returns [`PointError::Value`] unless `color` is a registered string.
    pub fn check_value(&self, color: &Value) -> Result<String> {
        match color {
            Value::String(label) => self.check(label).map(|()| label.clone()),
            other => Err(self.rejection(other.to_string())),
        }
    }

    fn rejection(&self, color: String) -> PointError {
        log::debug!("Rejected color '{color}'");
        PointError::Value {
            color,
            allowed: self.to_vec(),
        }
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for color in DEFAULT_COLORS {
            registry.add(color);
        }
        registry
    }
}

static ALLOWED: LazyLock<RwLock<ColorRegistry>> =
    LazyLock::new(|| RwLock::new(ColorRegistry::default()));

// A panic while holding the lock cannot leave the set half-updated.
fn read() -> RwLockReadGuard<'static, ColorRegistry> {
    ALLOWED.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, ColorRegistry> {
    ALLOWED.write().unwrap_or_else(PoisonError::into_inner)
}

/// Appends a color to the process-wide allowed set.
///
/// Affects validation of every later construction and color assignment.
/// Returns `false` if the color was already allowed.
pub fn add_color(color: impl Into<String>) -> bool {
    let color = color.into();
    let added = write().add(color.clone());
    if added {
        log::debug!("Added allowed color '{color}'");
    } else {
        log::trace!("Color '{color}' already allowed");
    }
    added
}

/// Snapshot of the process-wide allowed set, in insertion order.
#[must_use]
pub fn allowed_colors() -> Vec<String> {
    read().to_vec()
}

#[must_use]
pub fn is_allowed(color: &str) -> bool {
    read().contains(color)
}

/// Validates `color` against the process-wide allowed set.
///
/// # Errors
/// Returns [`PointError::Value`] unless `color` is a currently allowed string.
pub fn validate_color(color: &Value) -> Result<String> {
    read().check_value(color)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
