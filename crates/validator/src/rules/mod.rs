//! Built-in rule steps
//!
//! Each rule is a small value type implementing
//! [`Rule`](crate::pipeline::Rule) or [`Transform`](crate::pipeline::Transform).
//! Builders create them; they are public so a pipeline's contents can be
//! reasoned about and tested one step at a time.
//!
//! - **Type**: [`TypeMatch`], [`IsInteger`], [`IsFloat`]
//! - **Length**: [`MaxLen`], [`MinLen`], [`ExactLen`] measured by [`LengthMode`]
//! - **Precision**: [`DecimalPlaces`]
//! - **Coercion**: [`NumericCoercion`]

pub mod coerce;
pub mod length;
pub mod numeric;
pub mod type_match;

pub use coerce::{NumericCoercion, parse_number};
pub use length::{ExactLen, LengthMode, MaxLen, MinLen, digit_length};
pub use numeric::{DecimalPlaces, IsFloat, IsInteger, decimal_places};
pub use type_match::TypeMatch;
