//! Prelude module for convenient imports.
//!
//! `use chainable_validator::prelude::*;` brings in the builders, the
//! `types` factories, the registry and the failure types.

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{BuildError, Failure, FieldState, Outcome, RuleKind, RuleParameter};

// ============================================================================
// VALUES
// ============================================================================

pub use crate::value::{Callable, Symbol, TypeTag, Value, classify};

// ============================================================================
// CONSTRUCTION
// ============================================================================

pub use crate::builders::{BasicType, NumericRefinement};
pub use crate::pipeline::Pipeline;
pub use crate::types;

// ============================================================================
// REGISTRY
// ============================================================================

pub use crate::config::{FailureLevel, ValidatorConfig};
pub use crate::schema::{ChainValidator, Record, Schema, ValidationReport};
pub use crate::{rule, schema};
