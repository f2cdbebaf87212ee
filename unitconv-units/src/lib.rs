//! Unitconv Units - Temperature and distance conversion
//!
//! A fixed registry maps each supported ordered unit pair to one rule.
//! The `Converter` looks rules up, applies them at full decimal precision,
//! rounds half-up for display, and records every successful conversion.
//!
//! Units:
//! - Temperature (C, F, K)
//! - Distance (KM, L, MI)

mod unit;
mod rule;
mod registry;
mod history;
mod config;
mod convert;

pub use unit::{UnitCode, UnitKind, ConversionError, normalize, unit_menu};
pub use rule::{ConversionRule, FormulaFn};
pub use registry::ConversionRegistry;
pub use history::HistoryEntry;
pub use config::{ConverterConfig, DEFAULT_DECIMAL_PLACES, PRECISION_ENV, DECIMAL_PLACES_ENV};
pub use convert::Converter;
