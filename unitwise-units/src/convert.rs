//! Value conversion
//!
//! Dispatches on the category's [`Conversion`] tag: factor ratio for linear
//! categories, the Celsius-pivot formula for temperature.

use crate::temperature::convert_temperature;
use crate::validate::{check_input, FloorUnit};
use crate::{Category, Conversion, Registry, Unit};
use tracing::trace;
use unitwise_core::{format_with, EngineConfig, UnitError};

/// Convert raw input text between two units of a category.
///
/// Returns the formatted result, or an empty string for pending input.
pub fn convert_value(
    registry: &Registry,
    config: &EngineConfig,
    raw: &str,
    category: &str,
    from: &str,
    to: &str,
) -> Result<String, UnitError> {
    let value = match check_input(registry, config, raw, category, FloorUnit::Selected(from))? {
        Some(v) => v,
        None => return Ok(String::new()),
    };

    let cat = registry.get_category(category)?;
    let from_unit = cat.unit(from)?;
    let to_unit = cat.unit(to)?;

    let result = match cat.conversion {
        Conversion::Temperature => {
            convert_temperature(value, cat.scale(from_unit)?, cat.scale(to_unit)?)
        }
        Conversion::Linear => convert_linear(cat, value, from_unit, to_unit)?,
    };

    let formatted = format_with(result, &config.format);
    trace!(category, from, to, value, result, formatted = %formatted, "converted");
    Ok(formatted)
}

/// value * from.factor / to.factor
pub fn convert_linear(category: &Category, value: f64, from: &Unit, to: &Unit) -> Result<f64, UnitError> {
    let base = from
        .to_base(value)
        .ok_or_else(|| UnitError::missing_factor(&category.id, &from.id))?;
    let to_factor = to
        .factor
        .ok_or_else(|| UnitError::missing_factor(&category.id, &to.id))?;

    if to_factor == 0.0 {
        return Err(UnitError::DivisionByZero);
    }

    let result = base / to_factor;
    if !result.is_finite() {
        return Err(UnitError::InvalidResult);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::reference_registry;

    fn convert(raw: &str, category: &str, from: &str, to: &str) -> Result<String, UnitError> {
        convert_value(&reference_registry(), &EngineConfig::default(), raw, category, from, to)
    }

    fn scratch() -> Category {
        Category::new("scratch", "Scratch", Conversion::Linear, vec![])
    }

    #[test]
    fn test_length() {
        assert_eq!(convert("1", "length", "kilometer", "meter").unwrap(), "1000");
        assert_eq!(convert("12", "length", "inch", "foot").unwrap(), "1");
        assert_eq!(convert("1", "length", "mile", "kilometer").unwrap(), "1.6093");
    }

    #[test]
    fn test_weight_and_volume() {
        assert_eq!(convert("1", "weight", "pound", "kilogram").unwrap(), "0.4536");
        assert_eq!(convert("2.5", "weight", "ton", "kilogram").unwrap(), "2500");
        assert_eq!(convert("1", "volume", "gallon", "liter").unwrap(), "3.7854");
        assert_eq!(convert("1", "volume", "cubicMeter", "milliliter").unwrap(), "1000000");
    }

    #[test]
    fn test_temperature() {
        assert_eq!(convert("100", "temperature", "celsius", "fahrenheit").unwrap(), "212");
        assert_eq!(convert("0", "temperature", "celsius", "kelvin").unwrap(), "273.15");
        assert_eq!(convert("-40", "temperature", "fahrenheit", "celsius").unwrap(), "-40");
        assert_eq!(convert("0", "temperature", "kelvin", "fahrenheit").unwrap(), "-459.67");
    }

    #[test]
    fn test_absolute_zero_uses_selected_unit() {
        assert_eq!(
            convert("-300", "temperature", "celsius", "kelvin"),
            Err(UnitError::BelowAbsoluteZero)
        );
        assert_eq!(
            convert("-400", "temperature", "fahrenheit", "celsius").unwrap(),
            "-240"
        );
    }

    #[test]
    fn test_pending_input() {
        assert_eq!(convert("", "length", "meter", "foot").unwrap(), "");
        assert_eq!(convert("-", "temperature", "celsius", "kelvin").unwrap(), "");
    }

    #[test]
    fn test_scientific_output() {
        assert_eq!(convert("1", "length", "millimeter", "mile").unwrap(), "6.2137e-7");
        assert_eq!(convert("100000", "length", "kilometer", "millimeter").unwrap(), "1.0000e+11");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(convert("0.03125", "length", "meter", "meter").unwrap(), "0.0313");
        assert_eq!(convert("0.15625", "length", "inch", "inch").unwrap(), "0.1563");
        assert_eq!(convert("12344500000", "length", "meter", "meter").unwrap(), "1.2345e+10");
    }

    #[test]
    fn test_rejects_scientific_input() {
        assert_eq!(convert("1e16", "length", "meter", "meter"), Err(UnitError::InvalidNumberFormat));
    }

    #[test]
    fn test_unknown_units() {
        assert_eq!(
            convert("1", "length", "meter", "league"),
            Err(UnitError::unknown_unit("length", "league"))
        );
        assert_eq!(
            convert("1", "length", "league", "meter"),
            Err(UnitError::unknown_unit("length", "league"))
        );
        assert_eq!(
            convert("1", "speed", "mps", "kph"),
            Err(UnitError::unknown_category("speed"))
        );
    }

    #[test]
    fn test_linear_division_by_zero() {
        let from = Unit::new("a", "A", 1.0);
        let to = Unit::new("b", "B", 0.0);
        assert_eq!(convert_linear(&scratch(), 1.0, &from, &to), Err(UnitError::DivisionByZero));
    }

    #[test]
    fn test_linear_overflow() {
        let from = Unit::new("a", "A", f64::MAX);
        let to = Unit::new("b", "B", 1e-300);
        assert_eq!(convert_linear(&scratch(), 1e15, &from, &to), Err(UnitError::InvalidResult));
    }

    #[test]
    fn test_linear_missing_factor() {
        let from = Unit::formula("a", "A");
        let to = Unit::new("b", "B", 1.0);
        assert_eq!(
            convert_linear(&scratch(), 1.0, &from, &to),
            Err(UnitError::missing_factor("scratch", "a"))
        );
    }
}
