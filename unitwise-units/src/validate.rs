//! Input validation
//!
//! Rules run in order and the first failure wins: number format, magnitude,
//! sign, then the absolute-zero floor for temperature categories.

use crate::input::parse_number;
use crate::{Conversion, Registry};
use unitwise_core::{EngineConfig, UnitError};

/// Which unit the absolute-zero floor is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorUnit<'a> {
    /// First declared unit of the category (the default "from" selection)
    Default,
    /// The unit the caller is converting from
    Selected(&'a str),
}

/// Validate raw input, returning the parsed value (`None` for pending input)
pub fn check_input(
    registry: &Registry,
    config: &EngineConfig,
    raw: &str,
    category: &str,
    floor: FloorUnit<'_>,
) -> Result<Option<f64>, UnitError> {
    let value = match parse_number(raw)? {
        Some(v) => v,
        None => return Ok(None),
    };

    if value.abs() > config.max_magnitude {
        return Err(UnitError::ValueTooLarge);
    }

    let cat = registry.get_category(category)?;
    let from_unit = match floor {
        FloorUnit::Default => cat.default_unit(),
        FloorUnit::Selected(id) => Some(cat.unit(id)?),
    };

    if value < 0.0 && !cat.allow_negative {
        return Err(UnitError::negative_not_allowed(&cat.id));
    }

    if cat.conversion == Conversion::Temperature {
        if let Some(unit) = from_unit {
            if cat.scale(unit)?.is_below_absolute_zero(value) {
                return Err(UnitError::BelowAbsoluteZero);
            }
        }
    }

    Ok(Some(value))
}
