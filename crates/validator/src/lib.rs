//! # chainable-validator
//!
//! Declarative, chainable field validation. Each field gets a pipeline of
//! checks; a record passes when every pipeline passes, and every failure
//! is classified by a stable [`RuleKind`](foundation::RuleKind).
//!
//! ## Quick Start
//!
//! ```rust
//! use chainable_validator::prelude::*;
//!
//! let validator = ChainValidator::new(schema! {
//!     "name" => types::string().max_len(10)?.min_len(4)?.required(),
//!     "age" => types::number().len(2)?.required().greedy(),
//!     "birthday" => types::date(),
//! });
//!
//! assert!(validator.is_valid(&serde_json::json!({ "name": "Fooweee", "age": "20" })));
//!
//! let report = validator.validate(&serde_json::json!({ "name": "Al", "age": "200" }));
//! for failure in &report {
//!     println!("{}: {}", failure.code(), failure);
//! }
//! # Ok::<(), BuildError>(())
//! ```
//!
//! ## Evaluation order
//!
//! A pipeline runs its required check first, then coercion, the type
//! check, the integer/float check, and finally bounds, whatever order the
//! builder methods were called in. Bounds run in the order they were
//! added. The first failing step wins; later steps pass the state through.
//! A field that is absent and not required passes.
//!
//! ## Modules
//!
//! - [`value`]: the dynamic [`Value`](value::Value) and its [`TypeTag`](value::TypeTag)
//! - [`foundation`]: failures, field state, build errors
//! - [`pipeline`]: the step traits and [`Pipeline`](pipeline::Pipeline)
//! - [`rules`]: built-in steps
//! - [`builders`] and [`types`]: the fluent construction surface
//! - [`schema`]: [`Schema`](schema::Schema), [`ChainValidator`](schema::ChainValidator)
//!   and [`ValidationReport`](schema::ValidationReport)
//! - [`config`]: [`ValidatorConfig`](config::ValidatorConfig)

pub mod builders;
pub mod config;
pub mod foundation;
mod macros;
pub mod pipeline;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod types;
pub mod value;
