//! Named starting points for pipelines.
//!
//! Every call returns a fresh builder; nothing is shared between two
//! calls of the same factory.
//!
//! ```rust
//! use chainable_validator::types;
//! use chainable_validator::value::Value;
//!
//! let name = types::string().max_len(10)?.min_len(4)?.required();
//! assert!(name.validate("name", Some(Value::from("Fooweee"))).is_valid());
//! # Ok::<(), chainable_validator::foundation::BuildError>(())
//! ```

use crate::builders::{BasicType, Collection, Digits, Float, Integer, NumericRefinement, Unbounded};
use crate::value::TypeTag;

#[must_use]
pub fn string() -> BasicType<Collection> {
    BasicType::new(TypeTag::String)
}

#[must_use]
pub fn array() -> BasicType<Collection> {
    BasicType::new(TypeTag::Array)
}

#[must_use]
pub fn number() -> BasicType<Digits> {
    BasicType::new(TypeTag::Number)
}

/// `number().integer()`
#[must_use]
pub fn integer() -> NumericRefinement<Integer> {
    number().integer()
}

/// `number().float()`
#[must_use]
pub fn float() -> NumericRefinement<Float> {
    number().float()
}

/// Alias of [`float`].
#[must_use]
pub fn double() -> NumericRefinement<Float> {
    float()
}

#[must_use]
pub fn boolean() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Boolean)
}

#[must_use]
pub fn object() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Object)
}

#[must_use]
pub fn function() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Function)
}

#[must_use]
pub fn symbol() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Symbol)
}

#[must_use]
pub fn regex() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Regex)
}

#[must_use]
pub fn date() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Date)
}

#[must_use]
pub fn null() -> BasicType<Unbounded> {
    BasicType::new(TypeTag::Null)
}
