//! Length bounds
//!
//! One set of rules serves both families of length: the element or
//! character count of strings and arrays, and the digit-length of numbers.
//! [`LengthMode`] picks the measurement.
//!
//! Two quirks are part of the contract:
//!
//! - an empty string or array has no usable length, so it fails every
//!   bound, including `min_len(0)`;
//! - digit-length counts the digits of the integer part after flooring,
//!   ignoring the sign: `-20` has 2 digits, `2.345` has 1, and `-2.5`
//!   floors to `-3`, which has 1.

use crate::foundation::RuleParameter;
use crate::value::Value;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How a length rule measures a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Unicode scalar values of a string, elements of an array.
    #[default]
    Collection,
    /// Digits of a number's floored integer part.
    Digits,
}

impl LengthMode {
    /// Measures `value`, or returns `None` when it has no usable length.
    #[must_use]
    pub fn measure(self, value: &Value) -> Option<usize> {
        match self {
            Self::Collection => collection_length(value).filter(|&len| len > 0),
            Self::Digits => value.as_f64().map(digit_length),
        }
    }
}

fn collection_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Digit-length of `n`: the rendered length of `|floor(n)|`.
///
/// Integers are measured as they are. Non-finite numbers are measured by
/// their rendering (`NaN`, `inf`).
#[must_use]
pub fn digit_length(n: f64) -> usize {
    let integral = if n.fract() == 0.0 { n } else { n.floor() };
    integral.abs().to_string().len()
}

// ============================================================================
// RULES
// ============================================================================

crate::rule! {
    /// Fails when the measured length exceeds `max`.
    pub MaxLen { max: usize, mode: LengthMode } => MaxLength;
    parameter(self) { RuleParameter::Bound(self.max) }
    check(self, value) { self.mode.measure(value).is_some_and(|len| len <= self.max) }
}

crate::rule! {
    /// Fails when the measured length is below `min`.
    pub MinLen { min: usize, mode: LengthMode } => MinLength;
    parameter(self) { RuleParameter::Bound(self.min) }
    check(self, value) { self.mode.measure(value).is_some_and(|len| len >= self.min) }
}

crate::rule! {
    /// Fails unless the measured length equals `length`.
    pub ExactLen { length: usize, mode: LengthMode } => Length;
    parameter(self) { RuleParameter::Bound(self.length) }
    check(self, value) { self.mode.measure(value) == Some(self.length) }
}
