//! Fluent pipeline builders
//!
//! Builders are typestate wrappers around a [`Pipeline`](crate::pipeline::Pipeline).
//! The marker type decides which methods exist, so asking for a length
//! bound on a boolean, or for decimal precision on an integer, does not
//! compile:
//!
//! - [`BasicType<Collection>`]: strings and arrays, bounded by count
//! - [`BasicType<Digits>`]: numbers, bounded by digit-length
//! - [`BasicType<Unbounded>`]: every other type, no bounds
//! - [`NumericRefinement<Integer>`] / [`NumericRefinement<Float>`]:
//!   numbers with a subtype check, created from `BasicType<Digits>`
//!
//! Bound methods validate their argument on the spot and return
//! `Result<Self, BuildError>`, so a bad bound stops the schema from being
//! built instead of surfacing at validation time.
//!
//! ```rust
//! use chainable_validator::foundation::BuildError;
//! use chainable_validator::types;
//!
//! assert!(types::string().max_len(10).is_ok());
//! assert!(matches!(
//!     types::string().max_len(2.5),
//!     Err(BuildError::NonIntegerBound { .. })
//! ));
//! ```

mod basic;
mod numeric;

pub use basic::BasicType;
pub use numeric::NumericRefinement;

use crate::rules::LengthMode;

// ============================================================================
// SEALED MARKERS
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

/// A basic-type marker whose values have a length.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Measure: sealed::Sealed {
    /// How length bounds measure values of this type.
    const MODE: LengthMode;
}

/// A numeric subtype a [`NumericRefinement`] enforces.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Subtype: sealed::Sealed {
    /// Name reported by the subtype check.
    const NAME: &'static str;

    #[doc(hidden)]
    fn step() -> crate::pipeline::Step;
}

/// Strings and arrays: bounded by character or element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection;

/// Numbers: bounded by digit-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits;

/// Types without a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unbounded;

/// Numbers without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer;

/// Numbers with a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float;

impl sealed::Sealed for Collection {}
impl sealed::Sealed for Digits {}
impl sealed::Sealed for Integer {}
impl sealed::Sealed for Float {}

impl Measure for Collection {
    const MODE: LengthMode = LengthMode::Collection;
}

impl Measure for Digits {
    const MODE: LengthMode = LengthMode::Digits;
}

impl Subtype for Integer {
    const NAME: &'static str = "integer";

    fn step() -> crate::pipeline::Step {
        crate::pipeline::Step::check(crate::rules::IsInteger)
    }
}

impl Subtype for Float {
    const NAME: &'static str = "float";

    fn step() -> crate::pipeline::Step {
        crate::pipeline::Step::check(crate::rules::IsFloat)
    }
}
