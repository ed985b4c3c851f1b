//! LetHimCook Units - Cooking Unit Conversion
//!
//! Converts quantities between kitchen units and understands simple
//! English conversion requests.
//!
//! Categories:
//! - Volume (tsp, tbsp, fl oz, cup, pint, quart, gallon, ml, l)
//! - Weight (oz, lb, g, kg)
//! - Temperature (fahrenheit, celsius, kelvin)
//! - Count (count, item, piece, whole)

mod unit;
mod units;
mod convert;
mod parse;

pub use unit::Unit;
pub use units::{UnitRegistry, UNITS, normalize};
pub use convert::{convert, compatible, TemperatureScale};
pub use parse::{
    parse_request, natural_conversion, convert_natural,
    ConversionRequest, NaturalConversion, Pattern,
};
