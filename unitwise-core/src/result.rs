//! Outcome values handed back to presentation code

use crate::UnitError;
use serde::{Deserialize, Serialize};

/// Outcome of a conversion: either a formatted value or an error message.
///
/// When `error` is present, `value` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: String,
    pub error: Option<String>,
}

impl ConversionResult {
    /// No-op result for empty or incomplete input
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ok(value: impl Into<String>) -> Self {
        Self { value: value.into(), error: None }
    }

    pub fn failed(err: &UnitError) -> Self {
        Self { value: String::new(), error: Some(err.to_string()) }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<Result<String, UnitError>> for ConversionResult {
    fn from(result: Result<String, UnitError>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(e) => Self::failed(&e),
        }
    }
}

/// Outcome of validating raw input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl Validation {
    pub fn valid() -> Self {
        Self { is_valid: true, error: None }
    }

    pub fn invalid(err: &UnitError) -> Self {
        Self { is_valid: false, error: Some(err.to_string()) }
    }
}

impl<T> From<Result<T, UnitError>> for Validation {
    fn from(result: Result<T, UnitError>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(&e),
        }
    }
}
