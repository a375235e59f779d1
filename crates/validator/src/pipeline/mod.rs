//! The rule pipeline
//!
//! A [`Pipeline`] is an ordered list of [`Step`]s plus a dedicated
//! required slot. Validation is a left fold of the steps over a fresh
//! [`FieldState`]:
//!
//! 1. the required slot runs first, whenever it was switched on;
//! 2. every step passes the state through untouched once a failure is
//!    recorded or when the value is absent;
//! 3. otherwise a [`Rule`] step either keeps the state or records its
//!    failure, and a [`Transform`] step may replace the value.
//!
//! Consequently at most one failure is recorded per call, and it is the
//! earliest one in effective order.
//!
//! # Examples
//!
//! ```rust
//! use chainable_validator::foundation::RuleKind;
//! use chainable_validator::types;
//! use chainable_validator::value::Value;
//!
//! let age = types::number().len(2)?.required().greedy();
//!
//! assert!(age.validate("age", Some(Value::from("20"))).is_valid());
//!
//! let state = age.validate("age", Some(Value::from("200")));
//! assert_eq!(state.failure().unwrap().kind, RuleKind::Length);
//!
//! let state = age.validate("age", None);
//! assert_eq!(state.failure().unwrap().kind, RuleKind::Required);
//! # Ok::<(), chainable_validator::foundation::BuildError>(())
//! ```

use crate::foundation::{FieldState, RuleKind, RuleParameter};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// STEP TRAITS
// ============================================================================

/// A check over a present value.
///
/// Implementations only decide pass or fail; the pipeline owns the
/// short-circuit and absence handling, and builds the failure from
/// [`kind`](Rule::kind) and [`parameter`](Rule::parameter).
pub trait Rule: fmt::Debug + Send + Sync {
    /// Kind reported when the check fails.
    fn kind(&self) -> RuleKind;

    /// Argument reported when the check fails.
    fn parameter(&self) -> RuleParameter;

    /// Returns `true` if `value` passes.
    fn check(&self, value: &Value) -> bool;
}

/// A rewrite of a present value.
pub trait Transform: fmt::Debug + Send + Sync {
    /// Returns the replacement, or `None` to leave the value as it is.
    fn transform(&self, value: &Value) -> Option<Value>;
}

// ============================================================================
// STEP
// ============================================================================

/// One entry of a pipeline.
#[derive(Debug, Clone)]
pub enum Step {
    Check(Arc<dyn Rule>),
    Rewrite(Arc<dyn Transform>),
}

impl Step {
    pub fn check(rule: impl Rule + 'static) -> Self {
        Self::Check(Arc::new(rule))
    }

    pub fn rewrite(transform: impl Transform + 'static) -> Self {
        Self::Rewrite(Arc::new(transform))
    }

    /// Applies the step to `state`, returning the next state.
    #[must_use]
    pub fn apply(&self, state: FieldState) -> FieldState {
        if state.is_failure() || state.value().is_none() {
            return state;
        }

        match self {
            Self::Check(rule) => {
                let passed = state.value().is_some_and(|value| rule.check(value));
                if passed {
                    state
                } else {
                    state.fail(rule.kind(), rule.parameter())
                }
            }
            Self::Rewrite(transform) => {
                match state.value().and_then(|value| transform.transform(value)) {
                    Some(next) => state.with_value(next),
                    None => state,
                }
            }
        }
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// An ordered, immutable-once-built sequence of steps for one field.
///
/// Pipelines are `Send + Sync`; a built pipeline can validate from many
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    required: bool,
    steps: Vec<Step>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes absence a failure. Always evaluated before every other step,
    /// whenever it is called; calling it again changes nothing.
    #[must_use]
    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Number of steps, not counting the required slot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Adds a step after every existing one.
    #[must_use]
    pub(crate) fn append(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Adds a step before every existing one (the required slot still
    /// runs first).
    #[must_use]
    pub(crate) fn prepend(mut self, step: Step) -> Self {
        self.steps.insert(0, step);
        self
    }

    /// Adds a step right after the first type check, or at the end when
    /// there is none.
    #[must_use]
    pub(crate) fn insert_after_type(mut self, step: Step) -> Self {
        let at = self
            .steps
            .iter()
            .position(|existing| matches!(existing, Step::Check(rule) if rule.kind() == RuleKind::Type))
            .map_or(self.steps.len(), |index| index + 1);
        self.steps.insert(at, step);
        self
    }

    /// Runs the pipeline over one field. `None` means the field is absent.
    pub fn validate(&self, key: impl Into<String>, value: Option<Value>) -> FieldState {
        let mut state = FieldState::new(key, value);
        if self.required && state.value().is_none() {
            state = state.fail(RuleKind::Required, RuleParameter::None);
        }
        self.steps.iter().fold(state, |state, step| step.apply(state))
    }
}
