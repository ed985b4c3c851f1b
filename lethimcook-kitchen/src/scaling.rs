//! Recipe scaling
//!
//! Scale every measured ingredient by `new_servings / servings`.

use lethimcook_core::RecipeError;
use tracing::debug;

use crate::helpers::validate_positive;
use crate::Recipe;

/// Scale a recipe to a different number of servings
///
/// Returns a new recipe; the input is left untouched. Ingredients without
/// an amount and every non-ingredient field are copied as they are.
pub fn scale_recipe(recipe: &Recipe, new_servings: i64) -> Result<Recipe, RecipeError> {
    validate_positive(recipe.servings, "Original servings")?;
    validate_positive(new_servings, "New servings")?;

    let scale = new_servings as f64 / recipe.servings as f64;
    debug!(from = recipe.servings, to = new_servings, scale, "scaling recipe");

    let mut scaled = recipe.clone();
    scaled.servings = new_servings;
    for ingredient in &mut scaled.ingredients {
        if let Some(amount) = ingredient.amount {
            ingredient.amount = Some(amount * scale);
        }
    }

    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ingredient;
    use serde_json::json;

    fn basic() -> Recipe {
        Recipe::new(4, vec![
            Ingredient::new(2.0, "cups", "flour"),
            Ingredient::new(1.0, "tsp", "salt"),
        ]).unwrap()
    }

    #[test]
    fn test_double_recipe() {
        let scaled = scale_recipe(&basic(), 8).unwrap();
        assert_eq!(scaled.servings, 8);
        assert_eq!(scaled.ingredients.len(), 2);
        assert_eq!(scaled.ingredients[0].amount, Some(4.0));
        assert_eq!(scaled.ingredients[1].amount, Some(2.0));
    }

    #[test]
    fn test_halve_recipe() {
        let scaled = scale_recipe(&basic(), 2).unwrap();
        assert_eq!(scaled.servings, 2);
        assert_eq!(scaled.ingredients[0].amount, Some(1.0));
        assert_eq!(scaled.ingredients[1].amount, Some(0.5));
    }

    #[test]
    fn test_odd_and_fractional() {
        let scaled = scale_recipe(&basic(), 6).unwrap();
        assert_eq!(scaled.ingredients[0].amount, Some(3.0));

        let recipe = Recipe::new(4, vec![Ingredient::new(3.0, "cups", "flour")]).unwrap();
        let scaled = scale_recipe(&recipe, 3).unwrap();
        assert!((scaled.ingredients[0].amount.unwrap() - 2.25).abs() < 0.01);
    }

    #[test]
    fn test_input_not_mutated() {
        let recipe = basic();
        let _ = scale_recipe(&recipe, 12).unwrap();
        assert_eq!(recipe, basic());
    }

    #[test]
    fn test_round_trip_restores_amounts() {
        let recipe = Recipe::new(4, vec![Ingredient::new(1.0 / 3.0, "cup", "sugar")]).unwrap();
        let back = scale_recipe(&scale_recipe(&recipe, 8).unwrap(), 4).unwrap();
        let original = recipe.ingredients[0].amount.unwrap();
        assert!((back.ingredients[0].amount.unwrap() - original).abs() < 1e-12);
    }

    #[test]
    fn test_preserves_fields() {
        let recipe = Recipe::from_value(json!({
            "servings": 4,
            "name": "Chocolate Chip Cookies",
            "prep_time": "15 minutes",
            "oven": {"f": 375},
            "ingredients": [
                {"amount": 2, "unit": "cups", "name": "flour", "note": "all-purpose"},
                {"unit": "pinch", "name": "salt"},
            ]
        })).unwrap();

        let scaled = scale_recipe(&recipe, 8).unwrap();
        assert_eq!(scaled.name.as_deref(), Some("Chocolate Chip Cookies"));
        assert_eq!(scaled.prep_time.as_deref(), Some("15 minutes"));
        assert_eq!(scaled.extra["oven"], json!({"f": 375}));

        let flour = &scaled.ingredients[0];
        assert_eq!(flour.unit, "cups");
        assert_eq!(flour.name, "flour");
        assert_eq!(flour.note.as_deref(), Some("all-purpose"));

        assert_eq!(scaled.ingredients[1], recipe.ingredients[1]);
    }

    #[test]
    fn test_builder_fields_survive() {
        let recipe = Recipe::new(4, vec![Ingredient::new(2.0, "cups", "flour").with_note("sifted")])
            .unwrap()
            .with_name("Shortbread")
            .with_prep_time("20 minutes");

        let scaled = scale_recipe(&recipe, 2).unwrap();
        assert_eq!(scaled.name.as_deref(), Some("Shortbread"));
        assert_eq!(scaled.prep_time.as_deref(), Some("20 minutes"));
        assert_eq!(scaled.ingredients[0].note.as_deref(), Some("sifted"));
        assert_eq!(scaled.ingredients[0].amount, Some(1.0));
    }

    #[test]
    fn test_empty_ingredients() {
        let recipe = Recipe::new(4, vec![]).unwrap();
        let scaled = scale_recipe(&recipe, 8).unwrap();
        assert_eq!(scaled.servings, 8);
        assert!(scaled.ingredients.is_empty());
    }

    #[test]
    fn test_non_positive_servings() {
        let err = scale_recipe(&basic(), -2).unwrap_err();
        assert!(err.to_string().contains("positive"));
        assert!(scale_recipe(&basic(), 0).is_err());

        let mut broken = basic();
        broken.servings = 0;
        assert_eq!(
            scale_recipe(&broken, 4),
            Err(RecipeError::NonPositiveServings { field: "Original servings", value: 0 })
        );
    }
}
