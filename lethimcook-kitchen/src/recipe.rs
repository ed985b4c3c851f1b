//! Recipe model
//!
//! Recipes arrive as JSON documents. Known fields are typed; anything else
//! is kept in `extra` and written back untouched.

use lethimcook_core::RecipeError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::helpers::{require_field, validate_positive};

/// A recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity in `unit`; absent for things like "a pinch of salt"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub unit: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ingredient {
    pub fn new(amount: f64, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Ingredient {
            amount: Some(amount),
            unit: unit.into(),
            name: name.into(),
            note: None,
            extra: Map::new(),
        }
    }

    /// Ingredient with no measurable amount
    pub fn unmeasured(unit: impl Into<String>, name: impl Into<String>) -> Self {
        Ingredient {
            amount: None,
            unit: unit.into(),
            name: name.into(),
            note: None,
            extra: Map::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A recipe with servings and ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "whole_number")]
    pub servings: i64,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Servings as an integer; whole-number floats such as `4.0` are accepted
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Servings {
        Int(i64),
        Float(f64),
    }

    match Servings::deserialize(deserializer)? {
        Servings::Int(n) => Ok(n),
        Servings::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        Servings::Float(f) => Err(D::Error::custom(format!(
            "servings must be a whole number, got {}", f
        ))),
    }
}

impl Recipe {
    /// Create a validated recipe
    pub fn new(servings: i64, ingredients: Vec<Ingredient>) -> Result<Self, RecipeError> {
        validate_positive(servings, "Original servings")?;
        Ok(Recipe {
            servings,
            ingredients,
            name: None,
            prep_time: None,
            extra: Map::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prep_time(mut self, prep_time: impl Into<String>) -> Self {
        self.prep_time = Some(prep_time.into());
        self
    }

    /// Build a recipe from a JSON document, checking required keys first
    pub fn from_value(doc: Value) -> Result<Self, RecipeError> {
        let map = doc.as_object()
            .ok_or_else(|| RecipeError::InvalidRecipe("expected a JSON object".to_string()))?;

        require_field(map, "servings")?;
        require_field(map, "ingredients")?;

        let recipe: Recipe = serde_json::from_value(doc)
            .map_err(|e| RecipeError::InvalidRecipe(e.to_string()))?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Parse and validate a recipe from JSON text
    pub fn from_json(text: &str) -> Result<Self, RecipeError> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| RecipeError::InvalidRecipe(e.to_string()))?;
        Self::from_value(doc)
    }

    /// Check the invariants a hand-built recipe may have broken
    pub fn validate(&self) -> Result<(), RecipeError> {
        validate_positive(self.servings, "Original servings")
    }

    pub fn to_json_pretty(&self) -> Result<String, RecipeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RecipeError::InvalidRecipe(e.to_string()))
    }
}
