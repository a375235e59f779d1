//! The numeric refinement builder.

use super::{BasicType, Digits, Float, Subtype};
use crate::foundation::{BuildError, FieldState, IntoBound, RuleKind};
use crate::pipeline::{Pipeline, Step};
use crate::rules::DecimalPlaces;
use crate::value::Value;
use std::marker::PhantomData;

/// A number builder with an integer or float check.
///
/// Everything a `BasicType<Digits>` offers stays available; floats also
/// get [`decimal`](NumericRefinement::decimal).
#[derive(Debug, Clone)]
pub struct NumericRefinement<S> {
    base: BasicType<Digits>,
    _subtype: PhantomData<S>,
}

impl<S: Subtype> NumericRefinement<S> {
    pub(crate) fn refine(base: BasicType<Digits>) -> Self {
        Self {
            base: base.insert_after_type(S::step()),
            _subtype: PhantomData,
        }
    }

    /// Name of the enforced subtype.
    #[must_use]
    pub const fn subtype(&self) -> &'static str {
        S::NAME
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.map(BasicType::required)
    }

    /// See [`BasicType::greedy`].
    #[must_use]
    pub fn greedy(self) -> Self {
        self.map(BasicType::greedy)
    }

    /// Fails when the digit-length exceeds `max`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `max` is negative or not an integer.
    pub fn max_len(self, max: impl IntoBound) -> Result<Self, BuildError> {
        self.try_map(|base| base.max_len(max))
    }

    /// Fails when the digit-length is below `min`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `min` is negative or not an integer.
    pub fn min_len(self, min: impl IntoBound) -> Result<Self, BuildError> {
        self.try_map(|base| base.min_len(min))
    }

    /// Fails unless the digit-length is exactly `length`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `length` is negative or not an integer.
    pub fn len(self, length: impl IntoBound) -> Result<Self, BuildError> {
        self.try_map(|base| base.len(length))
    }

    pub fn validate(&self, key: impl Into<String>, value: Option<Value>) -> FieldState {
        self.base.validate(key, value)
    }

    #[must_use]
    pub const fn pipeline(&self) -> &Pipeline {
        self.base.pipeline()
    }

    #[must_use]
    pub fn into_pipeline(self) -> Pipeline {
        self.base.into_pipeline()
    }

    fn map(self, f: impl FnOnce(BasicType<Digits>) -> BasicType<Digits>) -> Self {
        Self {
            base: f(self.base),
            _subtype: PhantomData,
        }
    }

    fn try_map(
        self,
        f: impl FnOnce(BasicType<Digits>) -> Result<BasicType<Digits>, BuildError>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            base: f(self.base)?,
            _subtype: PhantomData,
        })
    }
}

impl NumericRefinement<Float> {
    /// Fails when the number has more than `places` digits after the point.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when `places` is negative or not an integer.
    pub fn decimal(self, places: impl IntoBound) -> Result<Self, BuildError> {
        let places = places.into_bound(RuleKind::Decimal)?;
        Ok(self.map(|base| base.append(Step::check(DecimalPlaces::new(places)))))
    }
}

impl<S: Subtype> From<NumericRefinement<S>> for Pipeline {
    fn from(builder: NumericRefinement<S>) -> Self {
        builder.into_pipeline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleParameter;
    use crate::value::TypeTag;

    fn number() -> BasicType<Digits> {
        BasicType::new(TypeTag::Number)
    }

    fn failure_of<S: Subtype>(
        builder: &NumericRefinement<S>,
        value: Value,
    ) -> Option<(RuleKind, RuleParameter)> {
        builder
            .validate("n", Some(value))
            .failure()
            .map(|f| (f.kind, f.parameter))
    }

    #[test]
    fn test_integer_subtype() {
        let integer = number().integer();
        assert_eq!(integer.subtype(), "integer");
        assert_eq!(failure_of(&integer, Value::from(42)), None);
        assert_eq!(
            failure_of(&integer, Value::from(4.2)),
            Some((RuleKind::Type, RuleParameter::Expected("integer")))
        );
    }

    #[test]
    fn test_float_subtype_rejects_integers() {
        let float = number().float();
        assert_eq!(failure_of(&float, Value::from(4.2)), None);
        assert_eq!(
            failure_of(&float, Value::from(42)),
            Some((RuleKind::Type, RuleParameter::Expected("float")))
        );
    }

    #[test]
    fn test_type_check_precedes_subtype() {
        let integer = number().integer();
        assert_eq!(
            failure_of(&integer, Value::from("42")),
            Some((RuleKind::Type, RuleParameter::Expected("number")))
        );
    }

    #[test]
    fn test_subtype_precedes_earlier_bounds() -> Result<(), BuildError> {
        let late = number().len(2)?.integer();
        let early = number().integer().len(2)?;
        let expected = Some((RuleKind::Type, RuleParameter::Expected("integer")));
        assert_eq!(failure_of(&late, Value::from(4.5)), expected);
        assert_eq!(failure_of(&early, Value::from(4.5)), expected);

        let float = number().max_len(1)?.greedy().float();
        assert_eq!(
            failure_of(&float, Value::from("42")),
            Some((RuleKind::Type, RuleParameter::Expected("float")))
        );
        Ok(())
    }

    #[test]
    fn test_decimal_precision() -> Result<(), BuildError> {
        let price = number().float().decimal(2)?;
        assert_eq!(failure_of(&price, Value::from(9.99)), None);
        assert_eq!(
            failure_of(&price, Value::from(9.999)),
            Some((RuleKind::Decimal, RuleParameter::Bound(2)))
        );
        Ok(())
    }

    #[test]
    fn test_decimal_rejects_fractional_bound() {
        let err = number().float().decimal(1.5).unwrap_err();
        assert_eq!(err.rule(), RuleKind::Decimal);
    }

    #[test]
    fn test_greedy_refinement_order() -> Result<(), BuildError> {
        let count = number().integer().len(2)?.required().greedy();
        assert_eq!(failure_of(&count, Value::from(" 42 ")), None);
        assert_eq!(
            failure_of(&count, Value::from("4.5")),
            Some((RuleKind::Type, RuleParameter::Expected("integer")))
        );
        assert_eq!(
            failure_of(&count, Value::from("420")),
            Some((RuleKind::Length, RuleParameter::Bound(2)))
        );
        assert_eq!(
            count.validate("n", None).failure().map(|f| f.kind),
            Some(RuleKind::Required)
        );
        Ok(())
    }
}
