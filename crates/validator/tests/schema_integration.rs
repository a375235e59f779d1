//! End-to-end schema validation.

use chainable_validator::prelude::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn profile_validator() -> Result<ChainValidator, BuildError> {
    Ok(ChainValidator::new(schema! {
        "name" => types::string().max_len(10)?.min_len(4)?.required(),
        "age" => types::number().len(2)?.required().greedy(),
        "birthday" => types::date(),
        "callback" => types::function(),
        "info" => types::object(),
        "liked" => types::array(),
        "test" => types::regex(),
        "brand" => types::symbol(),
        "optional" => types::string().len(3)?,
    }))
}

fn full_record() -> Value {
    let birthday = Utc.with_ymd_and_hms(1990, 2, 8, 0, 0, 0).single().map(Value::from);
    let pattern = Regex::new("(?i)t").map(Value::from).ok();

    let mut entries = vec![
        ("name", Value::from("Fooweee")),
        ("age", Value::from("20")),
        ("callback", Value::from(Callable::new(|_| Value::Null))),
        ("info", [("bio", "foobar")].into_iter().collect()),
        ("liked", Value::from(vec!["apple", "banana"])),
        ("brand", Value::from(Symbol::new("Apple Inc."))),
    ];
    entries.extend(birthday.map(|date| ("birthday", date)));
    entries.extend(pattern.map(|re| ("test", re)));
    entries.into_iter().collect()
}

#[test]
fn full_profile_passes() -> Result<(), BuildError> {
    let report = profile_validator()?.validate(&full_record());
    assert!(report.passed(), "{report}");
    assert_eq!(report.checked(), 9);
    Ok(())
}

#[test]
fn short_name_and_long_age_fail() -> Result<(), BuildError> {
    let report = profile_validator()?.validate(&json!({ "name": "Al", "age": "200" }));

    let summary: Vec<_> = report
        .failures()
        .iter()
        .map(|f| (f.key.as_str(), f.kind, f.parameter))
        .collect();
    assert_eq!(
        summary,
        [
            ("name", RuleKind::MinLength, RuleParameter::Bound(4)),
            ("age", RuleKind::Length, RuleParameter::Bound(2)),
        ]
    );
    Ok(())
}

#[test]
fn json_record_passes_with_coerced_age() -> Result<(), BuildError> {
    let validator = profile_validator()?;
    assert!(validator.is_valid(&json!({ "name": "Fooweee", "age": "20" })));
    assert!(!validator.is_valid(&json!({ "name": "Fooweee", "age": "twenty" })));
    Ok(())
}

#[test]
fn wrong_types_are_reported_per_field() -> Result<(), BuildError> {
    let report = profile_validator()?.validate(&json!({
        "name": "Fooweee",
        "age": 20,
        "info": [],
        "liked": {},
        "optional": "abcd",
    }));

    let json = report.to_json();
    assert_eq!(json["passed"], json!(false));
    assert_eq!(
        json["failures"],
        json!([
            { "code": "type", "key": "info", "parameter": "object", "value": [] },
            { "code": "type", "key": "liked", "parameter": "array", "value": {} },
            { "code": "length", "key": "optional", "parameter": 3, "value": "abcd" },
        ])
    );
    Ok(())
}

#[test]
fn report_propagates_as_error() -> Result<(), BuildError> {
    fn check(
        validator: &ChainValidator,
        record: &serde_json::Value,
    ) -> Result<(), Box<dyn std::error::Error>> {
        validator.validate(record).into_result()?;
        Ok(())
    }

    let validator = profile_validator()?;
    assert!(check(&validator, &json!({ "name": "Fooweee", "age": 20 })).is_ok());
    let err = check(&validator, &json!({})).unwrap_err();
    assert!(err.to_string().contains("name is required, but it is undefined."));
    Ok(())
}

#[test]
fn shared_validator_across_threads() -> Result<(), BuildError> {
    let validator = Arc::new(profile_validator()?);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let age = if i % 2 == 0 { "20" } else { "200" };
                validator
                    .validate(&json!({ "name": "Fooweee", "age": age }))
                    .passed()
            })
        })
        .collect();

    let results: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, [true, false, true, false, true, false, true, false]);
    Ok(())
}
