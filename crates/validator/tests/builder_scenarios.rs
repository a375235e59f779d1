//! Builder behavior through the public API.

use chainable_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn failure(state: &FieldState) -> Option<(RuleKind, RuleParameter)> {
    state.failure().map(|f| (f.kind, f.parameter))
}

#[rstest]
#[case(Value::from(20), true)]
#[case(Value::from(-20), true)]
#[case(Value::from(200), false)]
#[case(Value::from(2.345), false)]
#[case(Value::from(99.5), true)]
fn number_len_two(#[case] value: Value, #[case] passes: bool) -> Result<(), BuildError> {
    let pipeline = types::number().len(2)?;
    assert_eq!(pipeline.validate("n", Some(value)).is_valid(), passes);
    Ok(())
}

#[test]
fn number_len_counts_floored_integer_part() -> Result<(), BuildError> {
    let one = types::number().len(1)?;
    assert!(one.validate("n", Some(Value::from(2.345))).is_valid());
    assert!(one.validate("n", Some(Value::from(-2.5))).is_valid());
    Ok(())
}

#[test]
fn empty_string_fails_min_len_zero() -> Result<(), BuildError> {
    let state = types::string().min_len(0)?.validate("s", Some(Value::from("")));
    assert_eq!(failure(&state), Some((RuleKind::MinLength, RuleParameter::Bound(0))));
    Ok(())
}

#[test]
fn array_length_counts_elements() -> Result<(), BuildError> {
    let liked = types::array().min_len(1)?.max_len(3)?;
    assert!(liked.validate("liked", Some(Value::from(vec!["apple", "banana"]))).is_valid());
    let state = liked.validate("liked", Some(Value::from(vec![1, 2, 3, 4])));
    assert_eq!(failure(&state), Some((RuleKind::MaxLength, RuleParameter::Bound(3))));
    Ok(())
}

#[rstest]
#[case(Value::from("20"), None)]
#[case(Value::from(20), None)]
#[case(
    Value::from("abc"),
    Some((RuleKind::Type, RuleParameter::Expected("number")))
)]
#[case(
    Value::from(""),
    Some((RuleKind::Type, RuleParameter::Expected("number")))
)]
fn greedy_required_number(
    #[case] value: Value,
    #[case] expected: Option<(RuleKind, RuleParameter)>,
) {
    let pipeline = types::number().required().greedy();
    assert_eq!(failure(&pipeline.validate("age", Some(value))), expected);
}

#[test]
fn greedy_order_is_independent_of_call_order() -> Result<(), BuildError> {
    let early = types::number().greedy().len(2)?.required();
    let late = types::number().len(2)?.required().greedy();
    for raw in ["20", "200", "x", "-2.5"] {
        assert_eq!(
            failure(&early.validate("age", Some(Value::from(raw)))),
            failure(&late.validate("age", Some(Value::from(raw)))),
            "input {raw}"
        );
    }
    Ok(())
}

#[test]
fn subtype_order_is_independent_of_call_order() -> Result<(), BuildError> {
    let bounds_first = types::number().len(2)?.max_len(3)?.integer();
    let subtype_first = types::number().integer().len(2)?.max_len(3)?;
    for value in [Value::from(4.5), Value::from(-12.5), Value::from(420), Value::from(42)] {
        assert_eq!(
            failure(&bounds_first.validate("n", Some(value.clone()))),
            failure(&subtype_first.validate("n", Some(value.clone()))),
            "input {value}"
        );
    }
    assert_eq!(
        failure(&bounds_first.validate("n", Some(Value::from(4.5)))),
        Some((RuleKind::Type, RuleParameter::Expected("integer")))
    );

    let float_late = types::number().min_len(3)?.float();
    let float_early = types::number().float().min_len(3)?;
    for raw in [7, 700] {
        assert_eq!(
            failure(&float_late.validate("n", Some(Value::from(raw)))),
            failure(&float_early.validate("n", Some(Value::from(raw)))),
        );
    }
    Ok(())
}

#[test]
fn required_rejects_absence_but_not_null() {
    let pipeline = types::null().required();
    assert_eq!(
        failure(&pipeline.validate("nothing", None)),
        Some((RuleKind::Required, RuleParameter::None))
    );
    assert!(pipeline.validate("nothing", Some(Value::Null)).is_valid());
}

#[test]
fn type_failure_hides_later_failures() -> Result<(), BuildError> {
    let pipeline = types::string().len(3)?.required();
    let state = pipeline.validate("optional", Some(Value::from(12345)));
    assert_eq!(failure(&state), Some((RuleKind::Type, RuleParameter::Expected("string"))));
    Ok(())
}

#[test]
fn float_refinement() -> Result<(), BuildError> {
    let price = types::double().decimal(2)?.required();
    assert!(price.validate("price", Some(Value::from(19.99))).is_valid());
    assert_eq!(
        failure(&price.validate("price", Some(Value::from(19)))),
        Some((RuleKind::Type, RuleParameter::Expected("float")))
    );
    assert_eq!(
        failure(&price.validate("price", Some(Value::from(19.999)))),
        Some((RuleKind::Decimal, RuleParameter::Bound(2)))
    );
    Ok(())
}

#[test]
fn integer_refinement_keeps_length_bounds() -> Result<(), BuildError> {
    let year = types::integer().len(4)?.greedy();
    assert!(year.validate("year", Some(Value::from("1990"))).is_valid());
    assert_eq!(
        failure(&year.validate("year", Some(Value::from(199)))),
        Some((RuleKind::Length, RuleParameter::Bound(4)))
    );
    Ok(())
}

#[rstest]
#[case(types::string().max_len(1.5).err(), RuleKind::MaxLength)]
#[case(types::string().min_len(-3).err(), RuleKind::MinLength)]
#[case(types::number().len(f64::NAN).err(), RuleKind::Length)]
#[case(types::array().len(-0.5).err(), RuleKind::Length)]
fn bad_bounds_fail_construction(#[case] err: Option<BuildError>, #[case] rule: RuleKind) {
    assert_eq!(err.map(|e| e.rule()), Some(rule));
}

#[test]
fn failure_messages() -> Result<(), BuildError> {
    let name = types::string().max_len(10)?.min_len(4)?.required();
    let state = name.validate("name", Some(Value::from("Al")));
    let failure = state.into_result().unwrap_err();
    assert_eq!(failure.code(), "min_length");
    assert_eq!(
        failure.to_string(),
        "Length insufficient: name, should be at least 4."
    );
    Ok(())
}
