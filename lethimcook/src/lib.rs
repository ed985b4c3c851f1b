//! LetHimCook - unit conversions for the kitchen
//!
//! ```
//! use lethimcook::{convert, convert_natural};
//!
//! let ml = convert(2.0, "cups", "ml").unwrap();
//! assert!((ml - 473.176).abs() < 1e-9);
//!
//! let sentence = convert_natural("how many ml in 3 teaspoons").unwrap();
//! assert_eq!(sentence, "3 teaspoons = 14.79 ml");
//! ```

pub use lethimcook_core::{Category, ConversionError, RecipeError, ErrorReport, codes};
pub use lethimcook_units::{
    convert, compatible, convert_natural, natural_conversion, parse_request,
    ConversionRequest, NaturalConversion, Pattern, TemperatureScale,
    Unit, UnitRegistry, UNITS, normalize,
};
pub use lethimcook_kitchen::{scale_recipe, Recipe, Ingredient};
