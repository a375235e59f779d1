//! The state threaded through a pipeline.
//!
//! A [`FieldState`] is created fresh for every `validate` call. Steps take
//! it by value and hand back either the same state or a new one; nothing
//! holds on to an earlier state, so there is nothing to mutate in place.

use crate::foundation::{Failure, RuleKind, RuleParameter};
use crate::value::Value;

/// Result of running a pipeline over one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Valid,
    Failure(Failure),
}

impl Outcome {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Key, current value and outcome of one field under validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    key: String,
    value: Option<Value>,
    outcome: Outcome,
}

impl FieldState {
    /// Creates a valid state for `key`. `None` means the field is absent.
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            value,
            outcome: Outcome::Valid,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current value, reflecting any coercion applied so far.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.outcome.is_valid()
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Failure(failure) => Some(failure),
            Outcome::Valid => None,
        }
    }

    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// Returns the final value on success, or the recorded failure.
    pub fn into_result(self) -> Result<Option<Value>, Failure> {
        match self.outcome {
            Outcome::Valid => Ok(self.value),
            Outcome::Failure(failure) => Err(failure),
        }
    }

    /// Records a failure against the current value.
    ///
    /// An existing failure is kept: the earliest rule to fail wins.
    #[must_use]
    pub fn fail(self, kind: RuleKind, parameter: RuleParameter) -> Self {
        if self.is_failure() {
            return self;
        }
        let failure = Failure::new(kind, self.key.clone(), self.value.clone(), parameter);
        Self {
            outcome: Outcome::Failure(failure),
            ..self
        }
    }

    /// Replaces the value, keeping key and outcome.
    #[must_use]
    pub fn with_value(self, value: Value) -> Self {
        Self {
            value: Some(value),
            ..self
        }
    }
}
