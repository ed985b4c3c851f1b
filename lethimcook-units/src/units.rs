//! Unit definitions - the fixed kitchen vocabulary organized by category

use std::collections::HashMap;
use std::sync::LazyLock;
use lethimcook_core::{Category, ConversionError};
use crate::Unit;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Lowercase and trim a unit string
pub fn normalize(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Registry of all known units
///
/// Built once and never mutated afterwards, so it is safe to share
/// between threads without locking.
pub struct UnitRegistry {
    units: HashMap<&'static str, Unit>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by any of its spellings (normalized first)
    pub fn get(&self, unit: &str) -> Option<&Unit> {
        let key = normalize(unit);
        self.aliases
            .get(key.as_str())
            .and_then(|symbol| self.units.get(symbol))
    }

    /// Category of a unit
    pub fn category_of(&self, unit: &str) -> Result<Category, ConversionError> {
        self.get(unit)
            .map(|u| u.category)
            .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))
    }

    /// Multiplier to the category's base unit
    ///
    /// `None` for unknown units and for temperature scales; callers must
    /// branch on the category before asking for a factor.
    pub fn factor_to_base(&self, unit: &str) -> Option<f64> {
        self.get(unit).and_then(|u| u.to_base)
    }

    /// Canonical units in a category, smallest first
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.values()
            .filter(|u| u.category == category)
            .collect();
        units.sort_by(|a, b| {
            a.to_base.unwrap_or(0.0)
                .total_cmp(&b.to_base.unwrap_or(0.0))
                .then_with(|| a.name.cmp(&b.name))
        });
        units
    }

    /// Every spelling the registry accepts
    pub fn aliases(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.aliases.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    fn register(&mut self, unit: Unit, aliases: &[&'static str]) {
        let symbol = unit.symbol;
        self.aliases.insert(symbol, symbol);
        self.aliases.insert(unit.name, symbol);
        for &alias in aliases {
            self.aliases.insert(alias, symbol);
        }
        self.units.insert(symbol, unit);
    }

    fn register_all_units(&mut self) {
        self.register_volume_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_count_units();
    }

    fn register_volume_units(&mut self) {
        // Factors to milliliters
        self.register(Unit::linear("tsp", "teaspoon", Category::Volume, 4.92892), &["teaspoons"]);
        self.register(Unit::linear("tbsp", "tablespoon", Category::Volume, 14.7868), &["tablespoons"]);
        self.register(Unit::linear("floz", "fluid ounce", Category::Volume, 29.5735), &["fl oz", "fluid ounces"]);
        self.register(Unit::linear("cup", "cup", Category::Volume, 236.588), &["cups"]);
        self.register(Unit::linear("pint", "pint", Category::Volume, 473.176), &["pints"]);
        self.register(Unit::linear("quart", "quart", Category::Volume, 946.353), &["quarts"]);
        self.register(Unit::linear("gallon", "gallon", Category::Volume, 3785.41), &["gallons"]);
        self.register(Unit::linear("ml", "milliliter", Category::Volume, 1.0), &["milliliters"]);
        self.register(Unit::linear("l", "liter", Category::Volume, 1000.0), &["liters"]);
    }

    fn register_weight_units(&mut self) {
        // Factors to grams
        self.register(Unit::linear("oz", "ounce", Category::Weight, 28.3495), &["ounces"]);
        self.register(Unit::linear("lb", "pound", Category::Weight, 453.592), &["lbs", "pounds"]);
        self.register(Unit::linear("g", "gram", Category::Weight, 1.0), &["grams"]);
        self.register(Unit::linear("kg", "kilogram", Category::Weight, 1000.0), &["kilograms"]);
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::temperature("f", "fahrenheit"), &[]);
        self.register(Unit::temperature("c", "celsius"), &[]);
        self.register(Unit::temperature("k", "kelvin"), &[]);
    }

    fn register_count_units(&mut self) {
        // All counts are interchangeable
        self.register(Unit::linear("count", "count", Category::Count, 1.0), &[]);
        self.register(Unit::linear("item", "item", Category::Count, 1.0), &["items"]);
        self.register(Unit::linear("piece", "piece", Category::Count, 1.0), &["pieces"]);
        self.register(Unit::linear("whole", "whole", Category::Count, 1.0), &[]);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  CUP "), "cup");
        assert_eq!(normalize("Fl Oz"), "fl oz");
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(UNITS.get("teaspoons").unwrap().symbol, "tsp");
        assert_eq!(UNITS.get("LBS").unwrap().symbol, "lb");
        assert_eq!(UNITS.get("fluid ounce").unwrap().symbol, "floz");
        assert_eq!(UNITS.get(" Celsius ").unwrap().symbol, "c");
    }

    #[test]
    fn test_category_of() {
        assert_eq!(UNITS.category_of("cups").unwrap(), Category::Volume);
        assert_eq!(UNITS.category_of("kg").unwrap(), Category::Weight);
        assert_eq!(UNITS.category_of("k").unwrap(), Category::Temperature);
        assert_eq!(UNITS.category_of("pieces").unwrap(), Category::Count);
    }

    #[test]
    fn test_unknown_unit() {
        let err = UNITS.category_of("blorg").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("blorg".to_string()));
    }

    #[test]
    fn test_factor_to_base() {
        assert_eq!(UNITS.factor_to_base("cup"), Some(236.588));
        assert_eq!(UNITS.factor_to_base("pound"), Some(453.592));
        assert_eq!(UNITS.factor_to_base("whole"), Some(1.0));
        assert_eq!(UNITS.factor_to_base("fahrenheit"), None);
        assert_eq!(UNITS.factor_to_base("blorg"), None);
    }

    #[test]
    fn test_every_alias_resolves_consistently() {
        for alias in UNITS.aliases() {
            let unit = UNITS.get(alias).unwrap();
            assert_eq!(UNITS.category_of(alias).unwrap(), unit.category);
            match unit.category {
                Category::Temperature => assert!(UNITS.factor_to_base(alias).is_none()),
                _ => assert!(UNITS.factor_to_base(alias).unwrap() > 0.0, "{}", alias),
            }
        }
    }

    #[test]
    fn test_base_units_have_unit_factor() {
        for category in [Category::Volume, Category::Weight, Category::Count] {
            let base = UNITS.get(category.base_unit()).unwrap();
            assert_eq!(base.symbol, category.base_unit());
            assert_eq!(base.to_base, Some(1.0));
        }
    }

    #[test]
    fn test_by_category() {
        let volume: Vec<&str> = UNITS.by_category(Category::Volume)
            .iter()
            .map(|u| u.symbol)
            .collect();
        assert_eq!(volume.first(), Some(&"ml"));
        assert_eq!(volume.last(), Some(&"gallon"));
        assert_eq!(volume.len(), 9);

        assert_eq!(UNITS.by_category(Category::Temperature).len(), 3);
    }
}
