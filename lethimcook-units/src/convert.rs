//! Conversion engine
//!
//! Linear categories scale through their base unit. Temperature pivots
//! through Celsius so each scale only needs a formula to and from it.

use lethimcook_core::{Category, ConversionError};
use serde::Serialize;
use tracing::debug;
use crate::units::{normalize, UNITS};

/// Convert a value from one unit to another
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from_unit = normalize(from_unit);
    let to_unit = normalize(to_unit);

    let from_category = UNITS.category_of(&from_unit)?;
    let to_category = UNITS.category_of(&to_unit)?;

    if from_category != to_category {
        return Err(ConversionError::IncompatibleUnits {
            from: from_category,
            to: to_category,
        });
    }

    // Same unit concept under any spelling is returned unchanged
    if UNITS.get(&from_unit).map(|u| u.symbol) == UNITS.get(&to_unit).map(|u| u.symbol) {
        return Ok(value);
    }

    let result = match from_category {
        Category::Temperature => convert_temperature(value, &from_unit, &to_unit)?,
        Category::Count => value,
        Category::Volume | Category::Weight => {
            let from_factor = linear_factor(&from_unit)?;
            let to_factor = linear_factor(&to_unit)?;
            value * from_factor / to_factor
        }
    };

    debug!(value, from = %from_unit, to = %to_unit, category = %from_category, result, "converted");
    Ok(result)
}

/// Check whether two known units share a category
pub fn compatible(a: &str, b: &str) -> Result<bool, ConversionError> {
    let lookup = |unit: &str| {
        let unit = normalize(unit);
        UNITS.get(&unit).ok_or(ConversionError::UnknownUnit(unit))
    };
    Ok(lookup(a)?.is_compatible(lookup(b)?))
}

fn linear_factor(unit: &str) -> Result<f64, ConversionError> {
    UNITS.factor_to_base(unit)
        .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))
}

/// Temperature scales understood by the Celsius pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Resolve a normalized alias
    pub fn from_alias(unit: &str) -> Result<Self, ConversionError> {
        match unit {
            "celsius" | "c" => Ok(TemperatureScale::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureScale::Kelvin),
            _ => Err(ConversionError::UnknownTemperatureUnit(unit.to_string())),
        }
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
        }
    }
}

fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let celsius = TemperatureScale::from_alias(from_unit)?.to_celsius(value);
    Ok(TemperatureScale::from_alias(to_unit)?.from_celsius(celsius))
}
