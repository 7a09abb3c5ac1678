//! Categories of mutually convertible units

use crate::registry::RegistryError;
use crate::{Conversion, TemperatureScale, Unit};
use serde::{Deserialize, Serialize};
use unitwise_core::UnitError;

/// A domain of convertible quantities (e.g., length)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub display_name: String,
    /// Units in declaration order; the first two are the default selection
    pub units: Vec<Unit>,
    /// Whether negative input is meaningful (true only for temperature)
    #[serde(default)]
    pub allow_negative: bool,
    #[serde(default)]
    pub conversion: Conversion,
}

impl Category {
    pub fn new(id: &str, display_name: &str, conversion: Conversion, units: Vec<Unit>) -> Self {
        Category {
            id: id.to_string(),
            display_name: display_name.to_string(),
            units,
            allow_negative: false,
            conversion,
        }
    }

    pub fn with_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    pub fn unit(&self, id: &str) -> Result<&Unit, UnitError> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| UnitError::unknown_unit(&self.id, id))
    }

    /// First declared unit
    pub fn default_unit(&self) -> Option<&Unit> {
        self.units.first()
    }

    /// First two declared units, used as (from, to) when the category is selected
    pub fn default_pair(&self) -> Option<(&Unit, &Unit)> {
        match self.units.as_slice() {
            [from, to, ..] => Some((from, to)),
            _ => None,
        }
    }

    /// Temperature scale for a unit of a temperature category
    pub fn scale(&self, unit: &Unit) -> Result<TemperatureScale, UnitError> {
        TemperatureScale::from_id(&unit.id).ok_or_else(|| UnitError::unknown_unit(&self.id, &unit.id))
    }

    /// Check the structural invariants of a category
    pub(crate) fn check(&self) -> Result<(), RegistryError> {
        if self.units.len() < 2 {
            return Err(RegistryError::TooFewUnits {
                category: self.id.clone(),
                count: self.units.len(),
            });
        }

        for (i, unit) in self.units.iter().enumerate() {
            if self.units[..i].iter().any(|u| u.id == unit.id) {
                return Err(RegistryError::DuplicateUnit {
                    category: self.id.clone(),
                    unit: unit.id.clone(),
                });
            }

            match self.conversion {
                Conversion::Linear => match unit.factor {
                    None => {
                        return Err(RegistryError::MissingFactor {
                            category: self.id.clone(),
                            unit: unit.id.clone(),
                        })
                    }
                    Some(factor) if !factor.is_finite() || factor <= 0.0 => {
                        return Err(RegistryError::InvalidFactor {
                            category: self.id.clone(),
                            unit: unit.id.clone(),
                            factor,
                        })
                    }
                    Some(_) => {}
                },
                Conversion::Temperature => {
                    if TemperatureScale::from_id(&unit.id).is_none() {
                        return Err(RegistryError::UnknownScale {
                            category: self.id.clone(),
                            unit: unit.id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
