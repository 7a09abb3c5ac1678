//! Category registry
//!
//! Read-only after construction. Every registry built through
//! [`RegistryBuilder`] or [`Registry::from_json`] satisfies the category
//! invariants: at least two units, unique ids, positive finite factors for
//! linear categories and known scales for temperature categories.

use crate::{Category, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use unitwise_core::UnitError;

/// Error type for registry construction
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate category: {category}")]
    DuplicateCategory { category: String },

    #[error("Category '{category}' needs at least 2 units, has {count}")]
    TooFewUnits { category: String, count: usize },

    #[error("Duplicate unit '{unit}' in category '{category}'")]
    DuplicateUnit { category: String, unit: String },

    #[error("Unit '{unit}' in linear category '{category}' has no factor")]
    MissingFactor { category: String, unit: String },

    #[error("Unit '{unit}' in category '{category}' has invalid factor {factor}")]
    InvalidFactor { category: String, unit: String, factor: f64 },

    #[error("Unit '{unit}' in category '{category}' is not a known temperature scale")]
    UnknownScale { category: String, unit: String },

    #[error("Invalid registry definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered set of categories
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registry {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RegistryDef {
    categories: Vec<Category>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Assemble a registry from categories already known to be valid
    pub(crate) fn from_parts(categories: Vec<Category>) -> Self {
        Registry { categories }
    }

    /// Load a registry definition: `{"categories": [...]}`
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let def: RegistryDef = serde_json::from_str(json)?;
        def.categories
            .into_iter()
            .fold(Registry::builder(), RegistryBuilder::category)
            .build()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// (id, display name) of every category, in declaration order
    pub fn list_categories(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .map(|c| (c.id.as_str(), c.display_name.as_str()))
            .collect()
    }

    /// (id, display name) of every unit in a category, in declaration order
    pub fn list_units(&self, category: &str) -> Result<Vec<(&str, &str)>, UnitError> {
        Ok(self
            .get_category(category)?
            .units
            .iter()
            .map(|u| (u.id.as_str(), u.display_name.as_str()))
            .collect())
    }

    pub fn get_category(&self, category: &str) -> Result<&Category, UnitError> {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .ok_or_else(|| UnitError::unknown_category(category))
    }

    pub fn get_unit(&self, category: &str, unit: &str) -> Result<&Unit, UnitError> {
        self.get_category(category)?.unit(unit)
    }

    /// Default (from, to) unit ids for a freshly selected category
    pub fn default_units(&self, category: &str) -> Result<(&str, &str), UnitError> {
        let cat = self.get_category(category)?;
        cat.default_pair()
            .map(|(from, to)| (from.id.as_str(), to.id.as_str()))
            .ok_or_else(|| UnitError::no_default_units(category))
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Builder that checks category invariants before producing a [`Registry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    categories: Vec<Category>,
}

impl RegistryBuilder {
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.id == category.id) {
                warn!(category = %category.id, "rejecting registry: duplicate category");
                return Err(RegistryError::DuplicateCategory { category: category.id.clone() });
            }
            if let Err(e) = category.check() {
                warn!(category = %category.id, error = %e, "rejecting registry");
                return Err(e);
            }
        }
        Ok(Registry::from_parts(self.categories))
    }
}
