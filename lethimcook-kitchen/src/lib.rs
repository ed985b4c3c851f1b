//! LetHimCook Kitchen
//!
//! Recipe handling built on top of the unit crates:
//! - Structured recipe model that keeps unknown fields intact
//! - Uniform validation of recipe documents
//! - Recipe scaling by servings
//!
//! For unit conversions (cups ↔ mL, F ↔ C), use lethimcook-units.

mod helpers;
mod recipe;
mod scaling;

pub use recipe::{Recipe, Ingredient};
pub use scaling::scale_recipe;
