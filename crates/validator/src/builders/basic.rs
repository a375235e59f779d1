//! The basic-type builder.

use super::{Digits, Float, Integer, Measure, NumericRefinement};
use crate::foundation::{BuildError, FieldState, IntoBound, RuleKind};
use crate::pipeline::{Pipeline, Step};
use crate::rules::{ExactLen, MaxLen, MinLen, NumericCoercion, TypeMatch};
use crate::value::{TypeTag, Value};
use std::marker::PhantomData;

/// A pipeline seeded with a type check for one [`TypeTag`].
///
/// `M` selects the available bound methods; see the
/// [module documentation](super).
#[derive(Debug, Clone)]
pub struct BasicType<M> {
    target: TypeTag,
    pipeline: Pipeline,
    _measure: PhantomData<M>,
}

impl<M> BasicType<M> {
    /// Creates a builder whose first step checks for `target`.
    #[must_use]
    pub fn new(target: TypeTag) -> Self {
        Self {
            target,
            pipeline: Pipeline::new().append(Step::check(TypeMatch::new(target))),
            _measure: PhantomData,
        }
    }

    /// The type this builder checks for.
    #[must_use]
    pub const fn target(&self) -> TypeTag {
        self.target
    }

    /// Makes absence a failure.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.pipeline = self.pipeline.mark_required();
        self
    }

    /// Runs the pipeline built so far over one field.
    pub fn validate(&self, key: impl Into<String>, value: Option<Value>) -> FieldState {
        self.pipeline.validate(key, value)
    }

    #[must_use]
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    #[must_use]
    pub fn into_pipeline(self) -> Pipeline {
        self.pipeline
    }

    pub(crate) fn append(mut self, step: Step) -> Self {
        self.pipeline = self.pipeline.append(step);
        self
    }

    pub(crate) fn prepend(mut self, step: Step) -> Self {
        self.pipeline = self.pipeline.prepend(step);
        self
    }

    pub(crate) fn insert_after_type(mut self, step: Step) -> Self {
        self.pipeline = self.pipeline.insert_after_type(step);
        self
    }
}

impl<M: Measure> BasicType<M> {
    /// Fails when the length exceeds `max`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `max` is negative or not an integer.
    pub fn max_len(self, max: impl IntoBound) -> Result<Self, BuildError> {
        let max = max.into_bound(RuleKind::MaxLength)?;
        Ok(self.append(Step::check(MaxLen::new(max, M::MODE))))
    }

    /// Fails when the length is below `min`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `min` is negative or not an integer.
    pub fn min_len(self, min: impl IntoBound) -> Result<Self, BuildError> {
        let min = min.into_bound(RuleKind::MinLength)?;
        Ok(self.append(Step::check(MinLen::new(min, M::MODE))))
    }

    /// Fails unless the length is exactly `length`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `length` is negative or not an integer.
    pub fn len(self, length: impl IntoBound) -> Result<Self, BuildError> {
        let length = length.into_bound(RuleKind::Length)?;
        Ok(self.append(Step::check(ExactLen::new(length, M::MODE))))
    }
}

impl BasicType<Digits> {
    /// Converts numeric strings to numbers before any other check runs.
    ///
    /// Values that are not numeric strings are left alone, so a later type
    /// check still rejects them.
    #[must_use]
    pub fn greedy(self) -> Self {
        self.prepend(Step::rewrite(NumericCoercion))
    }

    /// Restricts the number to integers. The check runs right after the
    /// type check, ahead of any bound added earlier.
    #[must_use]
    pub fn integer(self) -> NumericRefinement<Integer> {
        NumericRefinement::refine(self)
    }

    /// Restricts the number to non-integers. The check runs right after the
    /// type check, ahead of any bound added earlier.
    #[must_use]
    pub fn float(self) -> NumericRefinement<Float> {
        NumericRefinement::refine(self)
    }
}

impl<M> From<BasicType<M>> for Pipeline {
    fn from(builder: BasicType<M>) -> Self {
        builder.into_pipeline()
    }
}
