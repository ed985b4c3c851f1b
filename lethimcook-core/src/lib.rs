//! LetHimCook Core - Fundamental types
//!
//! This crate provides the core types used throughout LetHimCook:
//! - `Category`: Closed classification of units (volume, weight, temperature, count)
//! - `ConversionError`: Failures of the conversion engine and parser
//! - `RecipeError`: Failures of recipe validation and scaling
//! - `ErrorReport`: Serializable form of any error

mod category;
mod error;

pub use category::Category;
pub use error::{ConversionError, RecipeError, ErrorReport, codes};
