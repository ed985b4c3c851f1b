//! Unit representation with conversion factor

use std::fmt;
use serde::Serialize;
use lethimcook_core::Category;

/// A canonical unit concept shared by all of its aliases
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Short symbol (e.g., "tsp", "g", "f")
    pub symbol: &'static str,
    /// Full name (e.g., "teaspoon", "gram", "fahrenheit")
    pub name: &'static str,
    /// Category the unit belongs to
    pub category: Category,
    /// Multiplier to the category's base unit; `None` for temperature scales
    pub to_base: Option<f64>,
}

impl Unit {
    /// Create a unit converted by a plain factor
    pub const fn linear(symbol: &'static str, name: &'static str, category: Category, to_base: f64) -> Self {
        Unit { symbol, name, category, to_base: Some(to_base) }
    }

    /// Create a temperature scale (no single factor applies)
    pub const fn temperature(symbol: &'static str, name: &'static str) -> Self {
        Unit { symbol, name, category: Category::Temperature, to_base: None }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
