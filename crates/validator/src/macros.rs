//! Macros for declaring rules and schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a rule, a struct plus its [`Rule`](crate::pipeline::Rule) impl
//! - [`schema!`]: build a [`Schema`](crate::schema::Schema) from `key => pipeline` pairs
//!
//! # Examples
//!
//! ```rust
//! use chainable_validator::{schema, types};
//!
//! let schema = schema! {
//!     "name" => types::string().max_len(10)?.min_len(4)?.required(),
//!     "age" => types::number().len(2)?.required().greedy(),
//! };
//! assert_eq!(schema.len(), 2);
//! # Ok::<(), chainable_validator::foundation::BuildError>(())
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule: a struct, and its [`Rule`](crate::pipeline::Rule)
/// implementation reporting the given [`RuleKind`](crate::foundation::RuleKind).
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq)]` is always applied.
///
/// # Variants
///
/// **Unit rule** (no fields):
/// ```rust,ignore
/// rule! {
///     pub IsInteger => Type;
///     parameter(self) { RuleParameter::Expected("integer") }
///     check(self, value) { value.as_f64().is_some_and(|n| n.fract() == 0.0) }
/// }
/// ```
///
/// **Rule with fields**:
/// ```rust,ignore
/// rule! {
///     pub DecimalPlaces { max: usize } => Decimal;
///     parameter(self) { RuleParameter::Bound(self.max) }
///     check(self, value) { value.as_f64().is_some_and(|n| decimal_places(n) <= self.max) }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Unit rule ────────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $kind:ident;
        parameter($pself:ident) $param:block
        check($cself:ident, $value:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::pipeline::Rule for $name {
            fn kind(&self) -> $crate::foundation::RuleKind {
                $crate::foundation::RuleKind::$kind
            }

            fn parameter(&$pself) -> $crate::foundation::RuleParameter $param

            #[allow(unused_variables)]
            fn check(&$cself, $value: &$crate::value::Value) -> bool $check
        }
    };

    // ── Rule with fields ─────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } => $kind:ident;
        parameter($pself:ident) $param:block
        check($cself:ident, $value:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::pipeline::Rule for $name {
            fn kind(&self) -> $crate::foundation::RuleKind {
                $crate::foundation::RuleKind::$kind
            }

            fn parameter(&$pself) -> $crate::foundation::RuleParameter $param

            #[allow(unused_variables)]
            fn check(&$cself, $value: &$crate::value::Value) -> bool $check
        }
    };
}

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a [`Schema`](crate::schema::Schema) from `key => pipeline` pairs,
/// keeping the order in which keys are written.
///
/// Each right-hand side may be a pipeline or any builder convertible into
/// one.
#[macro_export]
macro_rules! schema {
    ($($key:expr => $pipeline:expr),* $(,)?) => {{
        let schema = $crate::schema::Schema::new();
        $(
            let schema = schema.field($key, $pipeline);
        )*
        schema
    }};
}
