//! Greedy numeric coercion.

use crate::pipeline::Transform;
use crate::value::Value;

/// Rewrites numeric strings to numbers; leaves everything else untouched
/// so that a later type check can reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericCoercion;

impl Transform for NumericCoercion {
    fn transform(&self, value: &Value) -> Option<Value> {
        value.as_str().and_then(parse_number).map(Value::Number)
    }
}

/// Parses a finite decimal number, ignoring surrounding whitespace.
///
/// Blank strings and spellings of infinity or NaN are not numbers.
#[must_use]
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
