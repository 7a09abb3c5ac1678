//! Unitwise Core - Fundamental types
//!
//! This crate provides the types shared by the conversion engine:
//! - `UnitError`: Validation and conversion failures with stable codes
//! - `ConversionResult` / `Validation`: Outcomes handed to presentation code
//! - `format_result`: Magnitude-aware result formatting
//! - `EngineConfig`: Limits and formatting options

mod config;
mod error;
mod format;
mod result;

pub use config::{EngineConfig, DEFAULT_MAX_MAGNITUDE};
pub use error::{codes, UnitError};
pub use format::{format_result, format_with, FormatOptions};
pub use result::{ConversionResult, Validation};
