//! Converter configuration: working precision and display rounding

use serde::{Deserialize, Serialize};
use unitconv_core::{UnitconvError, DEFAULT_PRECISION};

pub const PRECISION_ENV: &str = "UNITCONV_PRECISION";
pub const DECIMAL_PLACES_ENV: &str = "UNITCONV_DECIMAL_PLACES";

/// Default number of fraction digits in results
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Significant digits carried through rule arithmetic
    pub precision: usize,
    /// Fraction digits kept after round-half-up
    pub decimal_places: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl ConverterConfig {
    /// Read overrides from `UNITCONV_PRECISION` and `UNITCONV_DECIMAL_PLACES`
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            precision: read_or(&get, PRECISION_ENV, defaults.precision),
            decimal_places: read_or(&get, DECIMAL_PLACES_ENV, defaults.decimal_places),
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Working precision must leave room beyond the displayed digits
    pub fn validate(&self) -> Result<(), UnitconvError> {
        if self.precision == 0 {
            return Err(UnitconvError::config("precision must be positive"));
        }
        let minimum = self.decimal_places as usize + 3;
        if self.precision < minimum {
            return Err(UnitconvError::config(format!(
                "precision {} is too low for {} decimal places (need at least {})",
                self.precision, self.decimal_places, minimum
            ))
            .with_suggestion(format!("Set {} to {} or more", PRECISION_ENV, minimum)));
        }
        Ok(())
    }
}

fn read_or<T: std::str::FromStr + Copy>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match get(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring unparsable setting");
                default
            }
        },
    }
}
