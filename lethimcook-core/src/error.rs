//! Structured errors
//!
//! Every failure is an invalid-input failure: nothing here is transient or
//! worth retrying. Errors carry a machine-readable code and, where it helps,
//! a suggestion for fixing the input.

use crate::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const UNKNOWN_TEMPERATURE_UNIT: &str = "UNKNOWN_TEMPERATURE_UNIT";
    pub const UNPARSABLE_INPUT: &str = "UNPARSABLE_INPUT";
    // Recipe-specific error codes
    pub const MISSING_FIELD: &str = "MISSING_FIELD";
    pub const NON_POSITIVE_SERVINGS: &str = "NON_POSITIVE_SERVINGS";
    pub const INVALID_RECIPE: &str = "INVALID_RECIPE";
}

/// Errors raised by the conversion engine and the natural-language parser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Unit string not present in the registry
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Source and target resolve to different categories
    #[error("Cannot convert between {from} and {to}")]
    IncompatibleUnits { from: Category, to: Category },

    /// Temperature alias the Celsius pivot does not recognise
    #[error("Unknown temperature unit: {0}")]
    UnknownTemperatureUnit(String),

    /// Text matched none of the request patterns
    #[error("Could not parse conversion request: {0}")]
    UnparsableInput(String),
}

impl ConversionError {
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConversionError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            ConversionError::UnknownTemperatureUnit(_) => codes::UNKNOWN_TEMPERATURE_UNIT,
            ConversionError::UnparsableInput(_) => codes::UNPARSABLE_INPUT,
        }
    }

    /// Suggestion for fixing the input, if there is a useful one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConversionError::UnknownUnit(unit) => Some(format!(
                "Check the spelling of '{}' or use a listed unit", unit
            )),
            ConversionError::IncompatibleUnits { from, to } => Some(format!(
                "Pick two {} units or two {} units", from, to
            )),
            ConversionError::UnknownTemperatureUnit(_) => {
                Some("Use fahrenheit, celsius or kelvin".to_string())
            }
            ConversionError::UnparsableInput(_) => Some(
                "Try formats like: '2 cups to ml' or 'convert 1 pound to grams'".to_string()
            ),
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::new(self.code(), self.to_string(), self.suggestion())
    }
}

/// Errors raised while validating or scaling a recipe
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    /// Required key absent from the recipe document
    #[error("Recipe must have '{0}' key")]
    MissingField(&'static str),

    /// Original or target servings are zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositiveServings { field: &'static str, value: i64 },

    /// Document is not shaped like a recipe
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

impl RecipeError {
    pub fn code(&self) -> &'static str {
        match self {
            RecipeError::MissingField(_) => codes::MISSING_FIELD,
            RecipeError::NonPositiveServings { .. } => codes::NON_POSITIVE_SERVINGS,
            RecipeError::InvalidRecipe(_) => codes::INVALID_RECIPE,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            RecipeError::MissingField(field) => Some(format!("Add a '{}' entry to the recipe", field)),
            RecipeError::NonPositiveServings { .. } => Some("Use a servings count of 1 or more".to_string()),
            RecipeError::InvalidRecipe(_) => None,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::new(self.code(), self.to_string(), self.suggestion())
    }
}

/// Serializable error for machine consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_names_both_categories() {
        let err = ConversionError::IncompatibleUnits {
            from: Category::Volume,
            to: Category::Weight,
        };
        let msg = err.to_string();
        assert!(msg.contains("volume"));
        assert!(msg.contains("weight"));
        assert_eq!(err.code(), codes::INCOMPATIBLE_UNITS);
    }

    #[test]
    fn test_unknown_unit_mentions_unit() {
        let err = ConversionError::UnknownUnit("blorg".to_string());
        assert_eq!(err.to_string(), "Unknown unit: blorg");
    }

    #[test]
    fn test_unparsable_is_single_line() {
        let err = ConversionError::UnparsableInput("this is gibberish".to_string());
        assert!(!err.to_string().contains('\n'));
        assert!(err.suggestion().unwrap().contains("2 cups to ml"));
    }

    #[test]
    fn test_recipe_messages() {
        assert!(RecipeError::MissingField("servings").to_string().contains("servings"));
        let err = RecipeError::NonPositiveServings { field: "New servings", value: -2 };
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_report_json() {
        let report = ConversionError::UnknownUnit("blorg".to_string()).report();
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["code"], "UNKNOWN_UNIT");
        assert_eq!(value["message"], "Unknown unit: blorg");

        let report = RecipeError::InvalidRecipe("bad".to_string()).report();
        assert!(!report.to_json().contains("suggestion"));
    }

    #[test]
    fn test_report_display() {
        let report = ErrorReport::new("X", "boom", Some("fix it".to_string()));
        assert_eq!(format!("{}", report), "[X] boom (suggestion: fix it)");
    }
}
