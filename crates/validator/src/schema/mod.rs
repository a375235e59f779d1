//! Field registry and aggregation
//!
//! A [`Schema`] maps field names to pipelines in registration order. A
//! [`ChainValidator`] runs every pipeline against the matching value of a
//! [`Record`] and collects the failures into a [`ValidationReport`].
//!
//! ```rust
//! use chainable_validator::prelude::*;
//!
//! let validator = ChainValidator::new(schema! {
//!     "name" => types::string().max_len(10)?.min_len(4)?.required(),
//!     "age" => types::number().len(2)?.required().greedy(),
//! });
//!
//! let record = serde_json::json!({ "name": "Al", "age": "200" });
//! let report = validator.validate(&record);
//!
//! assert!(!report.passed());
//! assert_eq!(report.failure_for("name").map(|f| f.kind), Some(RuleKind::MinLength));
//! assert_eq!(report.failure_for("age").map(|f| f.kind), Some(RuleKind::Length));
//! # Ok::<(), BuildError>(())
//! ```

mod record;
mod report;
mod validator;

pub use record::Record;
pub use report::ValidationReport;
pub use validator::ChainValidator;

use crate::pipeline::Pipeline;
use indexmap::IndexMap;

/// Ordered mapping from field name to pipeline.
///
/// Registering a key twice replaces its pipeline but keeps its original
/// position.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, Pipeline>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to `pipeline`.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, pipeline: impl Into<Pipeline>) -> Self {
        self.fields.insert(key.into(), pipeline.into());
        self
    }

    /// Binds `key` to the pipeline built by `factory`. The factory runs
    /// once, here.
    #[must_use]
    pub fn field_with<F, P>(self, key: impl Into<String>, factory: F) -> Self
    where
        F: FnOnce() -> P,
        P: Into<Pipeline>,
    {
        self.field(key, factory())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Pipeline> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pipeline)> {
        self.fields.iter().map(|(key, pipeline)| (key.as_str(), pipeline))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, P> FromIterator<(K, P)> for Schema
where
    K: Into<String>,
    P: Into<Pipeline>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |schema, (key, pipeline)| schema.field(key, pipeline))
    }
}
