//! The conversion engine: lookup, apply, round, record

use std::sync::Arc;
use unitconv_core::{codes, Number, UnitconvError};
use crate::unit::normalize;
use crate::{ConversionError, ConversionRegistry, ConverterConfig, HistoryEntry, UnitCode};

/// Converts values through a shared registry and owns the session history.
pub struct Converter {
    registry: Arc<ConversionRegistry>,
    config: ConverterConfig,
    history: Vec<HistoryEntry>,
}

impl Converter {
    pub fn new(registry: Arc<ConversionRegistry>, config: ConverterConfig) -> Self {
        Self {
            registry,
            config,
            history: Vec::new(),
        }
    }

    /// Converter over the standard table, after validating `config`
    pub fn standard(config: ConverterConfig) -> Result<Self, UnitconvError> {
        config.validate()?;
        let registry = ConversionRegistry::standard(config.precision)?;
        Ok(Self::new(Arc::new(registry), config))
    }

    /// Convert using unit text. Text is trimmed and uppercased here;
    /// unknown codes are reported the same way as unregistered pairs.
    pub fn convert(&mut self, value: &Number, from: &str, to: &str) -> Result<Number, ConversionError> {
        let from_text = normalize(from);
        let to_text = normalize(to);

        match (UnitCode::parse(&from_text), UnitCode::parse(&to_text)) {
            (Ok(from_unit), Ok(to_unit)) => self.convert_units(value, from_unit, to_unit),
            _ => {
                tracing::warn!(from = %from_text, to = %to_text, "unknown unit in conversion");
                Err(ConversionError::InvalidConversion { from: from_text, to: to_text })
            }
        }
    }

    /// Convert between typed units. Appends one history entry on success,
    /// none on failure.
    pub fn convert_units(
        &mut self,
        value: &Number,
        from: UnitCode,
        to: UnitCode,
    ) -> Result<Number, ConversionError> {
        let rule = self.registry.lookup(from, to).map_err(|_| {
            tracing::warn!(%from, %to, "no rule registered");
            ConversionError::InvalidConversion {
                from: from.symbol().to_string(),
                to: to.symbol().to_string(),
            }
        })?;

        let working = value.with_precision(self.config.precision);
        let raw = rule.apply(&working, self.config.precision);
        let result = raw.round_half_up(self.config.decimal_places);

        tracing::debug!(%from, %to, input = %value, raw = %raw, output = %result, "converted");

        self.history.push(HistoryEntry {
            input: value.clone(),
            from,
            output: result.clone(),
            to,
            places: self.config.decimal_places,
        });
        Ok(result)
    }

    /// Snapshot of the history, in call order
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn registry(&self) -> &ConversionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl From<ConversionError> for UnitconvError {
    fn from(err: ConversionError) -> Self {
        match err {
            // An unknown code is just another pair with no rule
            ConversionError::UnknownUnit(unit) => UnitconvError::new(
                codes::INVALID_CONVERSION,
                format!("Invalid conversion: unknown unit {}", unit),
            ),
            ConversionError::RuleNotFound { from, to } => {
                UnitconvError::invalid_conversion(from.symbol(), to.symbol())
            }
            ConversionError::InvalidConversion { from, to } => {
                UnitconvError::invalid_conversion(&from, &to)
            }
        }
    }
}
