//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for decimal arithmetic, so constants such as
//! 273.15 or 0.179985 are represented exactly. Rounding for display is
//! done on the integer significand, never through binary floats.

use dashu_float::DBig;
use dashu_float::ops::Abs;
use dashu_int::IBig;
use dashu_int::ops::UnsignedAbs;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Default working precision (significant decimal digits)
pub const DEFAULT_PRECISION: usize = 23;

/// Arbitrary precision decimal number
///
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn at_precision(val: DBig, precision: usize) -> DBig {
        val.with_precision(precision.max(1)).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }

        // Rational format "a/b"
        if s.contains('/') && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            let (num_str, den_str) = s
                .split_once('/')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;

            let num: IBig = num_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let den: IBig = den_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            return Self::from_ibig(num).checked_div(&Self::from_ibig(den));
        }

        // Scientific notation with integer mantissa: "602214076e15"
        if (s.contains('e') || s.contains('E')) && !s.contains('.') {
            let lower = s.to_lowercase();
            if let Some((mantissa, exp)) = lower.split_once('e') {
                let mantissa: IBig = mantissa.parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: isize = exp.parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let value = DBig::from_parts(mantissa, exp);
                let precision = value.precision().max(DEFAULT_PRECISION);
                return Ok(Self { inner: Self::at_precision(value, precision) });
            }
        }

        // Keep every digit the user typed; callers round to their own precision
        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;
        let precision = inner.precision().max(DEFAULT_PRECISION);

        Ok(Self { inner: Self::at_precision(inner, precision) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::at_precision(DBig::from(n), DEFAULT_PRECISION) }
    }

    fn from_ibig(n: IBig) -> Self {
        Self { inner: Self::at_precision(DBig::from(n), DEFAULT_PRECISION) }
    }

    /// Exact ratio num/den carried at `precision` significant digits
    pub fn ratio(num: i64, den: i64, precision: usize) -> Result<Self, NumberError> {
        if den == 0 {
            return Err(NumberError::DivisionByZero);
        }
        let n = Self::at_precision(DBig::from(num), precision);
        let d = Self::at_precision(DBig::from(den), precision);
        Ok(Self { inner: n / d })
    }

    /// Re-express with a different working precision
    pub fn with_precision(&self, precision: usize) -> Self {
        Self { inner: Self::at_precision(self.inner.clone(), precision) }
    }

    /// Working precision in significant digits
    pub fn precision(&self) -> usize {
        self.inner.precision()
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    // ========== Basic Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    pub fn abs(&self) -> Self {
        Self { inner: Abs::abs(self.inner.clone()) }
    }

    // ========== Rounding ==========

    /// Round to `places` fraction digits, ties away from zero.
    ///
    /// Works on the decimal significand directly: 2.345 -> 2.35 and
    /// -2.345 -> -2.35 regardless of working precision.
    pub fn round_half_up(&self, places: u32) -> Self {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let target = -(places as isize);

        if exponent >= target {
            return self.clone();
        }

        let divisor = ten_pow((target - exponent) as usize);
        let mut quotient = &significand / &divisor;
        let twice_rem = (&significand % &divisor) * IBig::from(2);

        if twice_rem >= divisor {
            quotient += IBig::ONE;
        } else if twice_rem <= -divisor {
            quotient -= IBig::ONE;
        }

        Self { inner: DBig::from_parts(quotient, target) }
    }

    // ========== Display ==========

    /// Exact decimal text with exactly `places` fraction digits
    pub fn to_fixed(&self, places: u32) -> String {
        let rounded = self.round_half_up(places);
        let (significand, exponent) = rounded.inner.into_repr().into_parts();
        let scaled = if exponent >= -(places as isize) {
            significand * ten_pow((exponent + places as isize) as usize)
        } else {
            significand
        };
        render_scaled(&scaled, places as usize)
    }

    /// Plain decimal text, no exponent notation, no trailing zeros
    pub fn to_plain(&self) -> String {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        if exponent >= 0 {
            render_scaled(&(significand * ten_pow(exponent as usize)), 0)
        } else {
            let text = render_scaled(&significand, (-exponent) as usize);
            trim_fraction(text)
        }
    }
}

fn ten_pow(exp: usize) -> IBig {
    IBig::from(10u8).pow(exp)
}

/// Render an integer that carries `places` implied fraction digits
fn render_scaled(scaled: &IBig, places: usize) -> String {
    let negative = *scaled < IBig::ZERO;
    let digits = scaled.clone().unsigned_abs().to_string();

    let body = if places == 0 {
        digits
    } else if digits.len() > places {
        let (int_part, frac_part) = digits.split_at(digits.len() - places);
        format!("{}.{}", int_part, frac_part)
    } else {
        format!("0.{}{}", "0".repeat(places - digits.len()), digits)
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(places) => write!(f, "{}", self.to_fixed(places as u32)),
            None => write!(f, "{}", self.to_plain()),
        }
    }
}

impl std::str::FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_str(s)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(num("42").to_plain(), "42");
        assert_eq!(num("  3.14 ").to_plain(), "3.14");
        assert_eq!(num("-0.5").to_plain(), "-0.5");
        assert_eq!(num("1.5e2").to_plain(), "150");
        assert_eq!(num("602214076e15").to_plain(), "602214076000000000000000");
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(num("1/4").to_fixed(2), "0.25");
        assert_eq!(num("1/3").to_fixed(4), "0.3333");
        assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Number::from_str("abc"), Err(NumberError::ParseError(_))));
        assert!(matches!(Number::from_str(""), Err(NumberError::ParseError(_))));
        assert!(matches!(Number::from_str("1.2.3"), Err(NumberError::ParseError(_))));
    }

    #[test]
    fn test_round_half_up_ties_away_from_zero() {
        assert_eq!(num("2.345").round_half_up(2).to_fixed(2), "2.35");
        assert_eq!(num("2.355").round_half_up(2).to_fixed(2), "2.36");
        assert_eq!(num("-2.345").round_half_up(2).to_fixed(2), "-2.35");
        assert_eq!(num("0.125").to_fixed(2), "0.13");
        assert_eq!(num("0.124999").to_fixed(2), "0.12");
    }

    #[test]
    fn test_round_is_noop_when_short() {
        assert_eq!(num("1.5").round_half_up(2).to_plain(), "1.5");
        assert_eq!(num("100").to_fixed(2), "100.00");
    }

    #[test]
    fn test_to_fixed_small_and_negative() {
        assert_eq!(num("0.004").to_fixed(2), "0.00");
        assert_eq!(num("0.005").to_fixed(2), "0.01");
        assert_eq!(num("-0.07").to_fixed(2), "-0.07");
        assert_eq!(num("-459.67").to_fixed(2), "-459.67");
    }

    #[test]
    fn test_ratio_precision() {
        let five_ninths = Number::ratio(5, 9, 23).unwrap();
        assert_eq!(five_ninths.to_fixed(6), "0.555556");
        assert!(Number::ratio(1, 0, 23).is_err());
    }

    #[test]
    fn test_arithmetic_is_exact_decimal() {
        // 0.1 + 0.2 is exactly 0.3 in decimal
        assert_eq!(num("0.1").add(&num("0.2")).to_plain(), "0.3");
        assert_eq!(num("273.15").sub(&num("273.15")).to_fixed(2), "0.00");
        assert_eq!(num("1.609344").mul(&num("10")).to_plain(), "16.09344");
    }

    #[test]
    fn test_parse_keeps_digits_beyond_default_precision() {
        let long = num("0.12345678901234567890123456");
        assert_eq!(long.to_plain(), "0.12345678901234567890123456");
        assert!(long.precision() >= 26);
        assert_eq!(num("5").precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn test_checked_div_zero() {
        assert_eq!(num("1").checked_div(&num("0")), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_display_with_precision() {
        let n = num("16.09344");
        assert_eq!(format!("{}", n), "16.09344");
        assert_eq!(format!("{:.2}", n), "16.09");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&num("0.62")).unwrap();
        assert_eq!(json, "\"0.62\"");
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_plain(), "0.62");
    }

    #[test]
    fn test_ordering() {
        assert!(num("-1") < num("0"));
        assert!(num("32.01") > num("32"));
        assert_eq!(num("-3").abs().to_plain(), "3");
    }
}
