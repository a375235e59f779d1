//! The record validator.

use super::{Record, Schema, ValidationReport};
use crate::config::ValidatorConfig;
use crate::foundation::{Failure, FieldState, Outcome};
use crate::value::Value;
use tracing::Level;

/// Runs a [`Schema`] against records.
///
/// Immutable once built and `Send + Sync`; one validator can serve many
/// threads. Every call allocates its own state.
#[derive(Debug, Clone, Default)]
pub struct ChainValidator {
    schema: Schema,
    config: ValidatorConfig,
}

impl ChainValidator {
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, ValidatorConfig::default())
    }

    #[must_use]
    pub fn with_config(schema: Schema, config: ValidatorConfig) -> Self {
        Self { schema, config }
    }

    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every registered field of `record`.
    ///
    /// Fields are visited in registration order and one field's failure
    /// never stops the others. Fields of `record` without a pipeline are
    /// ignored.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> ValidationReport {
        let span = tracing::debug_span!("validate_record", fields = self.schema.len());
        let _guard = span.enter();

        let mut failures = Vec::new();
        for (key, pipeline) in self.schema.iter() {
            match pipeline.validate(key, record.field(key)).into_outcome() {
                Outcome::Valid => tracing::debug!(key, "field passed"),
                Outcome::Failure(failure) => {
                    tracing::debug!(key, code = failure.code(), "field failed");
                    self.notify(&failure);
                    failures.push(failure);
                }
            }
        }

        tracing::debug!(failures = failures.len(), "record validated");
        ValidationReport::new(self.schema.len(), failures)
    }

    /// `true` when every registered field of `record` passes.
    pub fn is_valid<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.validate(record).passed()
    }

    /// Runs the pipeline registered for `key` alone, or returns `None` when
    /// no pipeline is registered under it.
    pub fn validate_field(&self, key: &str, value: Option<Value>) -> Option<FieldState> {
        self.schema
            .get(key)
            .map(|pipeline| pipeline.validate(key, value))
    }

    fn notify(&self, failure: &Failure) {
        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    key = %failure.key,
                    code = failure.code(),
                    parameter = %failure.parameter,
                    value = ?failure.value,
                    "{failure}"
                )
            };
        }

        let Some(level) = self.config.failure_level.to_tracing() else {
            return;
        };
        match level {
            Level::TRACE => emit!(Level::TRACE),
            Level::DEBUG => emit!(Level::DEBUG),
            Level::INFO => emit!(Level::INFO),
            _ => emit!(Level::WARN),
        }
    }
}

impl From<Schema> for ChainValidator {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailureLevel;
    use crate::foundation::{BuildError, RuleKind, RuleParameter};
    use crate::types;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn capture_events(level: FailureLevel, record: &serde_json::Value) -> Result<String, BuildError> {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(Level::TRACE)
            .finish();

        let validator = ChainValidator::with_config(
            profile()?.schema().clone(),
            ValidatorConfig::default().with_failure_level(level),
        );
        tracing::subscriber::with_default(subscriber, || validator.validate(record));
        Ok(captured.text())
    }

    fn profile() -> Result<ChainValidator, BuildError> {
        Ok(ChainValidator::new(
            Schema::new()
                .field("name", types::string().max_len(10)?.min_len(4)?.required())
                .field("age", types::number().len(2)?.required().greedy())
                .field("optional", types::string().len(3)?),
        ))
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChainValidator>();
    }

    #[test]
    fn test_passing_record() -> Result<(), BuildError> {
        let mut record = IndexMap::new();
        record.insert("name".to_owned(), Value::from("Fooweee"));
        record.insert("age".to_owned(), Value::from("20"));

        let report = profile()?.validate(&record);
        assert!(report.passed(), "{report}");
        assert_eq!(report.checked(), 3);
        Ok(())
    }

    #[test]
    fn test_failures_follow_registration_order() -> Result<(), BuildError> {
        let record = serde_json::json!({ "optional": "four", "age": "200", "name": "Al" });
        let report = profile()?.validate(&record);

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
                ("optional", RuleKind::Length, RuleParameter::Bound(3)),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_failure_carries_coerced_value() -> Result<(), BuildError> {
        let record = serde_json::json!({ "name": "Fooweee", "age": "200" });
        let report = profile()?.validate(&record);
        assert_eq!(
            report.failure_for("age").and_then(|f| f.value.clone()),
            Some(Value::from(200))
        );
        Ok(())
    }

    #[test]
    fn test_missing_required_fields() -> Result<(), BuildError> {
        let validator = profile()?;
        let report = validator.validate(&serde_json::json!({}));
        assert_eq!(report.failures().len(), 2);
        assert!(report.failures().iter().all(|f| f.kind == RuleKind::Required));
        assert!(!validator.is_valid(&serde_json::json!({})));
        Ok(())
    }

    #[test]
    fn test_unregistered_fields_are_ignored() {
        let validator = ChainValidator::new(Schema::new());
        assert!(validator.is_valid(&serde_json::json!({ "anything": 1 })));
    }

    #[test]
    fn test_validate_single_field() -> Result<(), BuildError> {
        let validator = profile()?;
        let state = validator.validate_field("age", Some(Value::from("abc")));
        assert_eq!(
            state.and_then(|s| s.failure().map(|f| f.kind)),
            Some(RuleKind::Type)
        );
        assert!(validator.validate_field("unknown", None).is_none());
        Ok(())
    }

    #[test]
    fn test_failure_event_carries_value() -> Result<(), BuildError> {
        let output = capture_events(FailureLevel::Info, &serde_json::json!({ "name": "Al", "age": 20 }))?;
        let line = output
            .lines()
            .find(|line| line.contains("Length insufficient"))
            .unwrap_or_default();
        assert!(line.contains("INFO"), "{output}");
        assert!(line.contains("key=name"), "{output}");
        assert!(line.contains(r#"value=Some(String("Al"))"#), "{output}");
        Ok(())
    }

    #[test]
    fn test_off_level_emits_no_failure_event() -> Result<(), BuildError> {
        let output = capture_events(FailureLevel::Off, &serde_json::json!({ "name": "Al", "age": 20 }))?;
        assert!(!output.contains("Length insufficient"), "{output}");
        assert!(output.contains("field failed"), "{output}");
        Ok(())
    }

    #[test]
    fn test_silent_config() -> Result<(), BuildError> {
        let validator = ChainValidator::with_config(
            profile()?.schema().clone(),
            ValidatorConfig::default().with_failure_level(FailureLevel::Off),
        );
        assert_eq!(validator.config().failure_level, FailureLevel::Off);
        assert!(!validator.is_valid(&serde_json::json!({ "name": "Al" })));
        Ok(())
    }
}
