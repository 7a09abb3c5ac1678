//! Unitwise Units - Category registry and conversion engine
//!
//! Categories:
//! - Length (meter, kilometer, mile, foot, etc.)
//! - Weight (kilogram, gram, pound, ounce, etc.)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liter, gallon, cup, fluid ounce, etc.)
//!
//! The free functions below run against the global [`REGISTRY`] with the
//! default [`EngineConfig`]. They never fail: errors come back as the message
//! inside [`Validation`] or [`ConversionResult`].

mod category;
mod convert;
mod input;
mod registry;
mod temperature;
mod unit;
mod units;
mod validate;

pub use category::Category;
pub use convert::{convert_linear, convert_value};
pub use input::{is_pending, parse_number};
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use temperature::{convert_temperature, TemperatureScale};
pub use unit::{Conversion, Unit};
pub use units::{reference_registry, REGISTRY};
pub use validate::{check_input, FloorUnit};

use tracing::debug;
use unitwise_core::{ConversionResult, EngineConfig, UnitError, Validation};

/// Validate input as it is typed.
///
/// Temperature input is checked against the absolute zero of the category's
/// first unit. Use [`validate_for_unit`] when the source unit is known.
pub fn validate(raw: &str, category: &str) -> Validation {
    validate_in(&REGISTRY, &EngineConfig::default(), raw, category, FloorUnit::Default)
}

/// Validate input against the unit it will be converted from
pub fn validate_for_unit(raw: &str, category: &str, from: &str) -> Validation {
    validate_in(&REGISTRY, &EngineConfig::default(), raw, category, FloorUnit::Selected(from))
}

/// Convert input between two units of a category
pub fn convert(raw: &str, category: &str, from: &str, to: &str) -> ConversionResult {
    convert_in(&REGISTRY, &EngineConfig::default(), raw, category, from, to)
}

/// [`validate`] against an explicit registry and config
pub fn validate_in(
    registry: &Registry,
    config: &EngineConfig,
    raw: &str,
    category: &str,
    floor: FloorUnit<'_>,
) -> Validation {
    let result = check_input(registry, config, raw, category, floor);
    if let Err(ref e) = result {
        log_rejection("validate", raw, category, e);
    }
    Validation::from(result)
}

/// [`convert`] against an explicit registry and config
pub fn convert_in(
    registry: &Registry,
    config: &EngineConfig,
    raw: &str,
    category: &str,
    from: &str,
    to: &str,
) -> ConversionResult {
    let result = convert_value(registry, config, raw, category, from, to);
    if let Err(ref e) = result {
        log_rejection("convert", raw, category, e);
    }
    ConversionResult::from(result)
}

fn log_rejection(op: &str, raw: &str, category: &str, err: &UnitError) {
    debug!(op, raw, category, code = err.code(), error = %err, "input rejected");
}
