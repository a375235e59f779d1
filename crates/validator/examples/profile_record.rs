//! Validates a user profile and prints each failure.
//!
//! Run with `CHAINABLE_LOG=debug` to also see per-field trace output.

use chainable_validator::prelude::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = chainable_log::auto_init()?;

    let validator = ChainValidator::with_config(
        schema! {
            "name" => types::string().max_len(10)?.min_len(4)?.required(),
            "age" => types::number().len(2)?.required().greedy(),
            "birthday" => types::date(),
            "callback" => types::function(),
            "info" => types::object(),
            "liked" => types::array(),
            "test" => types::regex(),
            "brand" => types::symbol(),
            "optional" => types::string().len(3)?,
        },
        ValidatorConfig::from_env(),
    );

    let mut profile: Vec<(&str, Value)> = vec![
        ("name", Value::from("Fooweee")),
        ("age", Value::from("20")),
        ("callback", Value::from(Callable::named("callback", |_| Value::Null))),
        ("info", Value::from(json!({ "bio": "foobar" }))),
        ("liked", Value::from(vec!["apple", "banana"])),
        ("test", Value::from(regex::Regex::new("(?i)t")?)),
        ("brand", Value::from(Symbol::new("Apple Inc."))),
    ];
    if let Some(birthday) = Utc.with_ymd_and_hms(1990, 2, 8, 0, 0, 0).single() {
        profile.push(("birthday", Value::from(birthday)));
    }
    let profile: Value = profile.into_iter().collect();

    report("profile", &validator.validate(&profile));
    report(
        "short name",
        &validator.validate(&json!({ "name": "Al", "age": "200" })),
    );

    Ok(())
}

fn report(label: &str, report: &ValidationReport) {
    if report.passed() {
        println!("{label}: Pass");
        return;
    }
    println!("{label}: Invalid");
    for failure in report {
        println!("- onError: {} {} ({})", failure.key, failure.code(), failure);
    }
}
