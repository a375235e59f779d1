//! Core validation types
//!
//! This module contains the building blocks every rule and builder shares:
//!
//! - **Classification**: [`RuleKind`], [`RuleParameter`]
//! - **Outcomes**: [`Failure`], [`Outcome`], [`FieldState`]
//! - **Construction**: [`BuildError`], [`IntoBound`]
//!
//! # Examples
//!
//! ```rust
//! use chainable_validator::foundation::{FieldState, RuleKind, RuleParameter};
//! use chainable_validator::value::Value;
//!
//! let state = FieldState::new("age", Some(Value::from("abc")))
//!     .fail(RuleKind::Type, RuleParameter::Expected("number"));
//!
//! assert_eq!(state.failure().unwrap().kind, RuleKind::Type);
//! ```

pub mod bound;
pub mod error;
pub mod state;

pub use bound::IntoBound;
pub use error::{BuildError, Failure, RuleKind, RuleParameter};
pub use state::{FieldState, Outcome};
