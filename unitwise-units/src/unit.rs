//! Unit representation with conversion factors

use serde::{Deserialize, Serialize};

/// How values are converted between the units of a category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// value_to = value_from * from.factor / to.factor
    #[default]
    Linear,
    /// Non-proportional scales pivoting through Celsius
    Temperature,
}

/// A unit within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable identifier (e.g., "meter", "fluidOunce")
    pub id: String,
    /// Label shown in selection controls (e.g., "Fluid Ounce (US)")
    pub display_name: String,
    /// Base units per one of this unit; absent for formula-based units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

impl Unit {
    /// Create a unit with proportional conversion
    pub fn new(id: &str, display_name: &str, factor: f64) -> Self {
        Unit {
            id: id.to_string(),
            display_name: display_name.to_string(),
            factor: Some(factor),
        }
    }

    /// Create a unit converted by a category formula rather than a factor
    pub fn formula(id: &str, display_name: &str) -> Self {
        Unit {
            id: id.to_string(),
            display_name: display_name.to_string(),
            factor: None,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.factor == Some(1.0)
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> Option<f64> {
        self.factor.map(|factor| value * factor)
    }
}
