//! Conversion errors
//!
//! Errors never crash the caller. `validate` and `convert` fold them into the
//! human-readable message carried by their result; the remaining operations
//! return them as plain `Result` errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const VALUE_TOO_LARGE: &str = "VALUE_TOO_LARGE";
    pub const NEGATIVE_NOT_ALLOWED: &str = "NEGATIVE_NOT_ALLOWED";
    pub const BELOW_ABSOLUTE_ZERO: &str = "BELOW_ABSOLUTE_ZERO";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INVALID_RESULT: &str = "INVALID_RESULT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const MISSING_FACTOR: &str = "MISSING_FACTOR";
    pub const NO_DEFAULT_UNITS: &str = "NO_DEFAULT_UNITS";
}

/// Error type for validation and conversion
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitError {
    #[error("Please enter a valid number")]
    InvalidNumberFormat,

    #[error("Value is too large for accurate conversion")]
    ValueTooLarge,

    #[error("Negative {category} values are not valid")]
    NegativeNotAllowed { category: String },

    #[error("Value below absolute zero (-273.15°C, -459.67°F, or 0K)")]
    BelowAbsoluteZero,

    #[error("Cannot convert to this unit (division by zero)")]
    DivisionByZero,

    #[error("Conversion resulted in an invalid value")]
    InvalidResult,

    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    #[error("Unit '{unit}' in category '{category}' has no conversion factor")]
    MissingFactor { category: String, unit: String },

    #[error("Category '{category}' needs at least two units")]
    NoDefaultUnits { category: String },
}

impl UnitError {
    pub fn negative_not_allowed(category: impl Into<String>) -> Self {
        Self::NegativeNotAllowed { category: category.into() }
    }

    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory { category: category.into() }
    }

    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownUnit { category: category.into(), unit: unit.into() }
    }

    pub fn missing_factor(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::MissingFactor { category: category.into(), unit: unit.into() }
    }

    pub fn no_default_units(category: impl Into<String>) -> Self {
        Self::NoDefaultUnits { category: category.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNumberFormat => codes::INVALID_NUMBER,
            Self::ValueTooLarge => codes::VALUE_TOO_LARGE,
            Self::NegativeNotAllowed { .. } => codes::NEGATIVE_NOT_ALLOWED,
            Self::BelowAbsoluteZero => codes::BELOW_ABSOLUTE_ZERO,
            Self::DivisionByZero => codes::DIV_ZERO,
            Self::InvalidResult => codes::INVALID_RESULT,
            Self::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::MissingFactor { .. } => codes::MISSING_FACTOR,
            Self::NoDefaultUnits { .. } => codes::NO_DEFAULT_UNITS,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(UnitError::InvalidNumberFormat.to_string(), "Please enter a valid number");
        assert_eq!(
            UnitError::negative_not_allowed("length").to_string(),
            "Negative length values are not valid"
        );
        assert!(UnitError::BelowAbsoluteZero.to_string().contains("absolute zero"));
        assert_eq!(
            UnitError::unknown_unit("length", "parsec").to_string(),
            "Unknown unit 'parsec' in category 'length'"
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(UnitError::DivisionByZero.code(), codes::DIV_ZERO);
        assert_eq!(UnitError::unknown_category("speed").code(), codes::UNKNOWN_CATEGORY);
        assert_eq!(UnitError::no_default_units("bare").code(), codes::NO_DEFAULT_UNITS);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(UnitError::negative_not_allowed("volume")).unwrap();
        assert_eq!(json["kind"], "negative_not_allowed");
        assert_eq!(json["category"], "volume");
    }
}
