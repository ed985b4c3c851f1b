//! Common recipe validation utilities

use lethimcook_core::RecipeError;
use serde_json::{Map, Value};

/// Fail when `key` is absent from a recipe document
pub fn require_field(doc: &Map<String, Value>, key: &'static str) -> Result<(), RecipeError> {
    if doc.contains_key(key) {
        Ok(())
    } else {
        Err(RecipeError::MissingField(key))
    }
}

/// Validate a positive servings count
pub fn validate_positive(value: i64, field: &'static str) -> Result<(), RecipeError> {
    if value <= 0 {
        return Err(RecipeError::NonPositiveServings { field, value });
    }
    Ok(())
}
