//! Numeric subtype and precision rules.
//!
//! Integer-ness is decided by the fractional part, so `20.0` is an integer
//! and is rejected by [`IsFloat`]. Values without a fractional part of
//! zero, including `NaN` and the infinities, count as floats.

use crate::foundation::RuleParameter;

crate::rule! {
    /// Fails when the number has a non-zero fractional part.
    pub IsInteger => Type;
    parameter(self) { RuleParameter::Expected("integer") }
    check(self, value) { value.as_f64().is_some_and(|n| n.fract() == 0.0) }
}

crate::rule! {
    /// Fails when the number has a zero fractional part.
    pub IsFloat => Type;
    parameter(self) { RuleParameter::Expected("float") }
    check(self, value) { value.as_f64().is_some_and(|n| n.fract() != 0.0) }
}

crate::rule! {
    /// Fails when the number has more than `max` digits after the point.
    pub DecimalPlaces { max: usize } => Decimal;
    parameter(self) { RuleParameter::Bound(self.max) }
    check(self, value) { value.as_f64().is_some_and(|n| decimal_places(n) <= self.max) }
}

/// Digits after the decimal point in the shortest rendering of `n`.
#[must_use]
pub fn decimal_places(n: f64) -> usize {
    n.to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}
