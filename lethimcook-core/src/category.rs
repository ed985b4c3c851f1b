//! Unit categories
//!
//! Every unit belongs to exactly one category. Two units can only be
//! converted into each other when their categories match.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Closed set of unit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Liquid and dry volume, base unit milliliter
    Volume,
    /// Mass, base unit gram
    Weight,
    /// Temperature scales (non-linear, pivot through Celsius)
    Temperature,
    /// Dimensionless item counts
    Count,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Volume,
        Category::Weight,
        Category::Temperature,
        Category::Count,
    ];

    /// Lowercase label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Category::Volume => "volume",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Count => "count",
        }
    }

    /// Symbol of the unit every linear conversion pivots through
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Volume => "ml",
            Category::Weight => "g",
            Category::Temperature => "celsius",
            Category::Count => "count",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
