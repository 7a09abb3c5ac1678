//! Unitwise - Unit conversion for interactive converters
//!
//! [`Unitwise`] bundles a category registry with the engine configuration and
//! exposes the contract presentation code relies on: `validate`, `convert`,
//! `list_categories` and `list_units`. [`ConverterSession`] models the state
//! of a single converter widget on top of it.

mod session;

pub use session::{ConversionState, ConverterSession};
pub use unitwise_core::{
    format_result, ConversionResult, EngineConfig, FormatOptions, UnitError, Validation,
};
pub use unitwise_units::{
    Category, Conversion, Registry, RegistryBuilder, RegistryError, TemperatureScale, Unit,
};

use std::sync::Arc;
use unitwise_units::{convert_in, validate_in, FloorUnit};

/// Main conversion engine
#[derive(Debug, Clone)]
pub struct Unitwise {
    registry: Arc<Registry>,
    config: EngineConfig,
}

impl Unitwise {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: EngineConfig::default(),
        }
    }

    /// Engine over the length, weight, temperature and volume categories
    pub fn with_reference_units() -> Self {
        Self::new(unitwise_units::reference_registry())
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate input as it is typed, against the category's default unit
    pub fn validate(&self, raw: &str, category: &str) -> Validation {
        validate_in(&self.registry, &self.config, raw, category, FloorUnit::Default)
    }

    /// Validate input against the unit it will be converted from
    pub fn validate_for_unit(&self, raw: &str, category: &str, from: &str) -> Validation {
        validate_in(&self.registry, &self.config, raw, category, FloorUnit::Selected(from))
    }

    pub fn convert(&self, raw: &str, category: &str, from: &str, to: &str) -> ConversionResult {
        convert_in(&self.registry, &self.config, raw, category, from, to)
    }

    pub fn list_categories(&self) -> Vec<(&str, &str)> {
        self.registry.list_categories()
    }

    pub fn list_units(&self, category: &str) -> Result<Vec<(&str, &str)>, UnitError> {
        self.registry.list_units(category)
    }

    /// Start a converter session on a category
    pub fn session(&self, category: &str) -> Result<ConverterSession, UnitError> {
        ConverterSession::new(self.clone(), category)
    }
}

impl Default for Unitwise {
    fn default() -> Self {
        Self::with_reference_units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Unitwise {
        Unitwise::with_reference_units()
    }

    #[test]
    fn test_list_categories() {
        let engine = engine();
        assert_eq!(
            engine.list_categories(),
            vec![
                ("length", "Length"),
                ("weight", "Weight"),
                ("temperature", "Temperature"),
                ("volume", "Volume"),
            ]
        );
    }

    #[test]
    fn test_list_units() {
        let engine = engine();
        let units = engine.list_units("volume").unwrap();
        assert_eq!(units.first(), Some(&("liter", "Liter")));
        assert_eq!(units.last(), Some(&("fluidOunce", "Fluid Ounce (US)")));
        assert!(engine.list_units("speed").is_err());
    }

    #[test]
    fn test_convert() {
        let engine = engine();
        assert_eq!(engine.convert("3", "length", "foot", "inch").value, "36");
        assert_eq!(engine.convert("1", "weight", "kilogram", "ounce").value, "35.274");
    }

    #[test]
    fn test_custom_registry() {
        let speed = Category::new(
            "speed",
            "Speed",
            Conversion::Linear,
            vec![
                Unit::new("mps", "Meters per second", 1.0),
                Unit::new("kph", "Kilometers per hour", 1.0 / 3.6),
            ],
        );
        let engine = Unitwise::new(Registry::builder().category(speed).build().unwrap());
        assert_eq!(engine.convert("10", "speed", "mps", "kph").value, "36");
        assert!(engine.convert("1", "length", "meter", "foot").is_error());
    }

    #[test]
    fn test_config_applies() {
        let engine = engine().with_config(EngineConfig::default().with_max_magnitude(10.0));
        assert_eq!(
            engine.validate("11", "length").error.as_deref(),
            Some("Value is too large for accurate conversion")
        );
    }
}
