//! Temperature scales
//!
//! Conversions pivot through Celsius: source → Celsius → target.

use serde::{Deserialize, Serialize};

/// A temperature scale with a fixed absolute-zero floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Look up a scale by unit id ("celsius", "fahrenheit", "kelvin")
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "celsius" => Some(Self::Celsius),
            "fahrenheit" => Some(Self::Fahrenheit),
            "kelvin" => Some(Self::Kelvin),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Kelvin => "kelvin",
        }
    }

    /// Lowest physically meaningful value on this scale
    pub fn absolute_zero(self) -> f64 {
        match self {
            Self::Celsius => -273.15,
            Self::Fahrenheit => -459.67,
            Self::Kelvin => 0.0,
        }
    }

    pub fn is_below_absolute_zero(self, value: f64) -> bool {
        value < self.absolute_zero()
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * (5.0 / 9.0),
            Self::Kelvin => value - 273.15,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * (9.0 / 5.0) + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert a temperature between scales
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    to.from_celsius(from.to_celsius(value))
}
