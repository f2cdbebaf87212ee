//! Unit codes and conversion errors

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// What a unit measures. Conversions never cross kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Temperature,
    Distance,
}

/// The closed set of supported units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitCode {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "KM")]
    Kilometer,
    #[serde(rename = "L", alias = "LK")]
    Leuk,
    #[serde(rename = "MI")]
    Mile,
}

impl UnitCode {
    pub const ALL: [UnitCode; 6] = [
        UnitCode::Celsius,
        UnitCode::Fahrenheit,
        UnitCode::Kelvin,
        UnitCode::Kilometer,
        UnitCode::Leuk,
        UnitCode::Mile,
    ];

    /// Canonical uppercase symbol
    pub fn symbol(self) -> &'static str {
        match self {
            UnitCode::Celsius => "C",
            UnitCode::Fahrenheit => "F",
            UnitCode::Kelvin => "K",
            UnitCode::Kilometer => "KM",
            UnitCode::Leuk => "L",
            UnitCode::Mile => "MI",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnitCode::Celsius => "Celsius",
            UnitCode::Fahrenheit => "Fahrenheit",
            UnitCode::Kelvin => "Kelvin",
            UnitCode::Kilometer => "Kilometer",
            UnitCode::Leuk => "Leuk",
            UnitCode::Mile => "Mile",
        }
    }

    pub fn kind(self) -> UnitKind {
        match self {
            UnitCode::Celsius | UnitCode::Fahrenheit | UnitCode::Kelvin => UnitKind::Temperature,
            UnitCode::Kilometer | UnitCode::Leuk | UnitCode::Mile => UnitKind::Distance,
        }
    }

    /// Parse user text: trimmed, case-insensitive, "LK" accepted for Leuk
    pub fn parse(text: &str) -> Result<UnitCode, ConversionError> {
        let normalized = normalize(text);
        match normalized.as_str() {
            "C" => Ok(UnitCode::Celsius),
            "F" => Ok(UnitCode::Fahrenheit),
            "K" => Ok(UnitCode::Kelvin),
            "KM" => Ok(UnitCode::Kilometer),
            "L" | "LK" => Ok(UnitCode::Leuk),
            "MI" => Ok(UnitCode::Mile),
            _ => Err(ConversionError::UnknownUnit(normalized)),
        }
    }
}

/// Canonical form of unit text before any lookup
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Menu of units shown in shell prompts, one per line
pub fn unit_menu() -> String {
    UnitCode::ALL
        .iter()
        .map(|u| format!("{} ({})\n", u.symbol(), u.name()))
        .collect()
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for UnitCode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitCode::parse(s)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Text does not name a supported unit
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// No rule registered for this ordered pair
    #[error("no conversion registered for {from} > {to}")]
    RuleNotFound { from: UnitCode, to: UnitCode },

    /// The requested conversion cannot be performed
    #[error("Invalid conversion: {from} > {to}")]
    InvalidConversion { from: String, to: String },
}
