//! Conversion rules: one directed formula per unit pair

use unitconv_core::Number;

/// Closed-form formula. Receives the value and the working precision.
pub type FormulaFn = fn(&Number, usize) -> Number;

/// A single directed transformation, immutable once built.
///
/// Rules work at full precision; rounding happens in the converter.
#[derive(Debug, Clone)]
pub enum ConversionRule {
    /// result = value * multiplier + offset
    Affine { multiplier: Number, offset: Number },
    /// Arbitrary formula for conversions not expressible as one affine pair
    Formula { name: &'static str, apply: FormulaFn },
}

impl ConversionRule {
    pub fn affine(multiplier: Number, offset: Number) -> Self {
        ConversionRule::Affine { multiplier, offset }
    }

    /// Pure scale factor, no offset
    pub fn scale(multiplier: Number) -> Self {
        ConversionRule::Affine { multiplier, offset: Number::from_i64(0) }
    }

    pub fn formula(name: &'static str, apply: FormulaFn) -> Self {
        ConversionRule::Formula { name, apply }
    }

    pub fn is_affine(&self) -> bool {
        matches!(self, ConversionRule::Affine { .. })
    }

    /// Apply the rule. Total over all inputs, including negatives.
    pub fn apply(&self, value: &Number, precision: usize) -> Number {
        match self {
            ConversionRule::Affine { multiplier, offset } => {
                value.mul(multiplier).add(offset)
            }
            ConversionRule::Formula { apply, .. } => apply(value, precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    #[test]
    fn test_affine_apply() {
        let c_to_f = ConversionRule::affine(num("1.8"), num("32"));
        assert_eq!(c_to_f.apply(&num("100"), 23).to_fixed(2), "212.00");
        assert_eq!(c_to_f.apply(&num("-40"), 23).to_fixed(2), "-40.00");
        assert!(c_to_f.is_affine());
    }

    #[test]
    fn test_scale_has_zero_offset() {
        let rule = ConversionRule::scale(num("5.556"));
        assert_eq!(rule.apply(&num("0"), 23).to_fixed(2), "0.00");
        assert_eq!(rule.apply(&num("2"), 23).to_plain(), "11.112");
    }

    #[test]
    fn test_affine_is_linear() {
        let rule = ConversionRule::affine(
            Number::ratio(5, 9, 23).unwrap(),
            Number::ratio(-160, 9, 23).unwrap(),
        );
        let a = num("98.6");
        let b = num("-17.25");
        let lhs = rule.apply(&a, 23).add(&rule.apply(&b, 23)).sub(&rule.apply(&num("0"), 23));
        let rhs = rule.apply(&a.add(&b), 23);
        assert!(lhs.sub(&rhs).abs() < num("0.0000000001"));
    }

    #[test]
    fn test_formula_rule() {
        fn textbook_f_to_c(value: &Number, precision: usize) -> Number {
            let shifted = value.sub(&Number::from_i64(32)).with_precision(precision);
            shifted
                .mul(&Number::from_i64(5))
                .checked_div(&Number::from_i64(9))
                .unwrap_or_else(|_| Number::from_i64(0))
        }

        let rule = ConversionRule::formula("f_to_c", textbook_f_to_c);
        assert!(!rule.is_affine());
        assert_eq!(rule.apply(&num("212"), 23).to_fixed(2), "100.00");
        assert_eq!(rule.apply(&num("0"), 23).to_fixed(2), "-17.78");
    }
}
