//! Failure classification and construction errors
//!
//! Validation-time failures and construction-time errors are separate
//! types:
//!
//! - [`Failure`] is data. It records which rule rejected which field, is
//!   accumulated per record, and never aborts anything.
//! - [`BuildError`] is returned by builder methods when a rule argument is
//!   unusable, so a malformed schema is rejected where it is written.
//!
//! Callers branch on [`RuleKind`], never on message text.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// RULE KIND
// ============================================================================

/// Stable classification attached to every [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// The field was absent.
    Required,
    /// The value has the wrong type tag or numeric subtype.
    Type,
    MaxLength,
    MinLength,
    /// Exact length mismatch.
    Length,
    /// Too many digits after the decimal point.
    Decimal,
}

impl RuleKind {
    /// Every kind, in the order rules are documented.
    pub const ALL: [Self; 6] = [
        Self::Required,
        Self::Type,
        Self::MaxLength,
        Self::MinLength,
        Self::Length,
        Self::Decimal,
    ];

    /// Snake-case code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type => "type",
            Self::MaxLength => "max_length",
            Self::MinLength => "min_length",
            Self::Length => "length",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// RULE PARAMETER
// ============================================================================

/// The argument a rule was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleParameter {
    /// Rules without an argument (`Required`).
    None,
    /// The expected type or numeric subtype name, e.g. `"string"`, `"integer"`.
    Expected(&'static str),
    /// A length or decimal-place bound.
    Bound(usize),
}

impl RuleParameter {
    #[must_use]
    pub const fn bound(&self) -> Option<usize> {
        match self {
            Self::Bound(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn expected(&self) -> Option<&'static str> {
        match self {
            Self::Expected(name) => Some(*name),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::None => serde_json::Value::Null,
            Self::Expected(name) => serde_json::Value::from(*name),
            Self::Bound(n) => serde_json::Value::from(*n),
        }
    }
}

impl fmt::Display for RuleParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Expected(name) => f.write_str(name),
            Self::Bound(n) => write!(f, "{n}"),
        }
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// A classified validation failure for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Which rule rejected the field.
    pub kind: RuleKind,
    /// The field name.
    pub key: String,
    /// The value the rule saw, after any coercion. `None` for absent fields.
    pub value: Option<Value>,
    /// The argument the rule was configured with.
    pub parameter: RuleParameter,
}

impl Failure {
    pub fn new(
        kind: RuleKind,
        key: impl Into<String>,
        value: Option<Value>,
        parameter: RuleParameter,
    ) -> Self {
        Self {
            kind,
            key: key.into(),
            value,
            parameter,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Converts the failure to a JSON object `{code, key, parameter, value}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "key": self.key,
            "parameter": self.parameter.to_json(),
            "value": self.value.as_ref().map(Value::to_json),
        })
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = &self.key;
        let param = &self.parameter;
        match self.kind {
            RuleKind::Required => write!(f, "{key} is required, but it is undefined."),
            RuleKind::Type => write!(f, "Incorrect type on {key}, should be {param}."),
            RuleKind::MaxLength => write!(f, "Length exceeded: {key}, should be at most {param}."),
            RuleKind::MinLength => {
                write!(f, "Length insufficient: {key}, should be at least {param}.")
            }
            RuleKind::Length => write!(f, "Length not matched: {key}, should be {param}."),
            RuleKind::Decimal => {
                write!(f, "Too many decimal places: {key}, should be at most {param}.")
            }
        }
    }
}

impl std::error::Error for Failure {}

// ============================================================================
// BUILD ERROR
// ============================================================================

/// Raised while configuring a pipeline, never while validating.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A bound argument had a fractional part or was not finite.
    #[error("{rule} bound should be an integer, got {value}")]
    NonIntegerBound { rule: RuleKind, value: f64 },

    /// A bound argument was below zero.
    #[error("{rule} bound should not be negative, got {value}")]
    NegativeBound { rule: RuleKind, value: f64 },
}

impl BuildError {
    /// The rule whose argument was rejected.
    #[must_use]
    pub const fn rule(&self) -> RuleKind {
        match self {
            Self::NonIntegerBound { rule, .. } | Self::NegativeBound { rule, .. } => *rule,
        }
    }
}
