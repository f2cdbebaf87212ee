//! Conversion registry - every supported directed pair and its rule

use std::collections::HashMap;
use unitconv_core::{Number, NumberError};
use crate::{ConversionError, ConversionRule, UnitCode};

/// Immutable map from (from, to) to the rule for that direction.
///
/// Only explicitly registered directions exist. Inverses are never derived
/// and identity pairs are never registered.
#[derive(Debug, Clone, Default)]
pub struct ConversionRegistry {
    rules: HashMap<(UnitCode, UnitCode), ConversionRule>,
}

impl ConversionRegistry {
    /// Registry with no rules
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    /// The full temperature and distance table, constants carried at
    /// `precision` significant digits.
    pub fn standard(precision: usize) -> Result<Self, NumberError> {
        let registry = Self::empty();
        let registry = register_temperature_rules(registry, precision)?;
        register_distance_rules(registry, precision)
    }

    /// Builder: add one directed rule. Identity pairs are skipped.
    pub fn with_rule(mut self, from: UnitCode, to: UnitCode, rule: ConversionRule) -> Self {
        if from == to {
            tracing::warn!(unit = %from, "refusing to register identity conversion");
            return self;
        }
        self.rules.insert((from, to), rule);
        self
    }

    /// The rule for exactly this ordered pair, or `RuleNotFound`
    pub fn lookup(&self, from: UnitCode, to: UnitCode) -> Result<&ConversionRule, ConversionError> {
        self.rules
            .get(&(from, to))
            .ok_or(ConversionError::RuleNotFound { from, to })
    }

    pub fn contains(&self, from: UnitCode, to: UnitCode) -> bool {
        self.rules.contains_key(&(from, to))
    }

    /// All registered pairs, sorted
    pub fn pairs(&self) -> Vec<(UnitCode, UnitCode)> {
        let mut pairs: Vec<_> = self.rules.keys().copied().collect();
        pairs.sort();
        pairs
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn constant(text: &str, precision: usize) -> Result<Number, NumberError> {
    Ok(Number::from_str(text)?.with_precision(precision))
}

fn register_temperature_rules(
    registry: ConversionRegistry,
    precision: usize,
) -> Result<ConversionRegistry, NumberError> {
    use UnitCode::{Celsius, Fahrenheit, Kelvin};

    let one = constant("1", precision)?;
    let nine_fifths = constant("1.8", precision)?;
    let five_ninths = Number::ratio(5, 9, precision)?;
    let thirty_two = constant("32", precision)?;
    let kelvin_offset = constant("273.15", precision)?;
    // (v - 32) * 5/9 == v * 5/9 - 160/9
    let f_to_c_offset = Number::ratio(-160, 9, precision)?;
    // (v - 273.15) * 9/5 + 32 == v * 9/5 - 459.67
    let k_to_f_offset = constant("-459.67", precision)?;

    Ok(registry
        .with_rule(Celsius, Fahrenheit, ConversionRule::affine(nine_fifths.clone(), thirty_two))
        .with_rule(Celsius, Kelvin, ConversionRule::affine(one.clone(), kelvin_offset.clone()))
        .with_rule(Fahrenheit, Celsius, ConversionRule::affine(five_ninths.clone(), f_to_c_offset.clone()))
        .with_rule(
            Fahrenheit,
            Kelvin,
            ConversionRule::affine(five_ninths, f_to_c_offset.add(&kelvin_offset)),
        )
        .with_rule(Kelvin, Celsius, ConversionRule::affine(one, constant("-273.15", precision)?))
        .with_rule(Kelvin, Fahrenheit, ConversionRule::affine(nine_fifths, k_to_f_offset)))
}

fn register_distance_rules(
    registry: ConversionRegistry,
    precision: usize,
) -> Result<ConversionRegistry, NumberError> {
    use UnitCode::{Kilometer, Leuk, Mile};

    Ok(registry
        .with_rule(Kilometer, Leuk, ConversionRule::scale(constant("0.179985", precision)?))
        .with_rule(Kilometer, Mile, ConversionRule::scale(constant("0.621371", precision)?))
        .with_rule(Leuk, Kilometer, ConversionRule::scale(constant("5.556", precision)?))
        .with_rule(Leuk, Mile, ConversionRule::scale(constant("3.452338", precision)?))
        .with_rule(Mile, Kilometer, ConversionRule::scale(constant("1.609344", precision)?))
        .with_rule(Mile, Leuk, ConversionRule::scale(constant("0.289658", precision)?)))
}
