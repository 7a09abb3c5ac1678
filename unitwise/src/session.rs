//! Converter session
//!
//! State of one converter widget: the selected category and units, the raw
//! input, and the latest conversion. The caller decides when input has
//! settled (e.g. after a debounce window) and then calls [`ConverterSession::settle`].

use crate::Unitwise;
use serde::{Deserialize, Serialize};
use tracing::trace;
use unitwise_core::UnitError;
use unitwise_units::is_pending;

/// Snapshot of a converter's state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionState {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub from_value: String,
    pub to_value: String,
    /// Error from the last settled conversion
    pub error: Option<String>,
    /// Immediate feedback on the raw input, updated on every keystroke
    pub input_error: Option<String>,
}

/// A single converter bound to an engine
#[derive(Debug, Clone)]
pub struct ConverterSession {
    engine: Unitwise,
    state: ConversionState,
}

impl ConverterSession {
    pub fn new(engine: Unitwise, category: &str) -> Result<Self, UnitError> {
        let mut session = Self {
            engine,
            state: ConversionState::default(),
        };
        session.set_category(category)?;
        Ok(session)
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn category(&self) -> &str {
        &self.state.category
    }

    pub fn from_unit(&self) -> &str {
        &self.state.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.state.to_unit
    }

    pub fn from_value(&self) -> &str {
        &self.state.from_value
    }

    pub fn to_value(&self) -> &str {
        &self.state.to_value
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn input_error(&self) -> Option<&str> {
        self.state.input_error.as_deref()
    }

    /// Select a category: units reset to its default pair, values and errors clear
    pub fn set_category(&mut self, category: &str) -> Result<(), UnitError> {
        let (from, to) = self.engine.registry().default_units(category)?;
        self.state = ConversionState {
            category: category.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            ..ConversionState::default()
        };
        trace!(category, from = %self.state.from_unit, to = %self.state.to_unit, "category selected");
        Ok(())
    }

    pub fn set_from_unit(&mut self, unit: &str) -> Result<(), UnitError> {
        self.engine.registry().get_unit(&self.state.category, unit)?;
        self.state.from_unit = unit.to_string();
        self.revalidate();
        self.settle();
        Ok(())
    }

    pub fn set_to_unit(&mut self, unit: &str) -> Result<(), UnitError> {
        self.engine.registry().get_unit(&self.state.category, unit)?;
        self.state.to_unit = unit.to_string();
        self.settle();
        Ok(())
    }

    /// Record raw input and refresh the immediate validation feedback
    pub fn input(&mut self, raw: &str) {
        self.state.from_value = raw.to_string();
        self.revalidate();
    }

    /// Recompute the converted value from the current input
    pub fn settle(&mut self) {
        let state = &mut self.state;
        if is_pending(&state.from_value) {
            state.to_value.clear();
            state.error = None;
            return;
        }

        let result = self.engine.convert(
            &state.from_value,
            &state.category,
            &state.from_unit,
            &state.to_unit,
        );
        trace!(input = %state.from_value, output = %result.value, error = ?result.error, "settled");
        state.to_value = result.value;
        state.error = result.error;
    }

    /// Exchange units and values.
    ///
    /// Only swaps when the last conversion produced a value without error;
    /// returns whether it did.
    pub fn swap(&mut self) -> bool {
        if self.state.error.is_some() || self.state.to_value.is_empty() {
            return false;
        }
        let state = &mut self.state;
        std::mem::swap(&mut state.from_unit, &mut state.to_unit);
        std::mem::swap(&mut state.from_value, &mut state.to_value);
        self.revalidate();
        trace!(from = %self.state.from_unit, to = %self.state.to_unit, "swapped");
        true
    }

    fn revalidate(&mut self) {
        let state = &mut self.state;
        state.input_error = self
            .engine
            .validate_for_unit(&state.from_value, &state.category, &state.from_unit)
            .error;
    }
}
