//! Semantic type tags and the classifier that assigns them.
//!
//! Every input, including an absent one, classifies to exactly one
//! [`TypeTag`]. The tag set is closed: pipelines seeded with a tag compare
//! against [`classify`] and nothing else.
//!
//! ```rust
//! use chainable_validator::value::{TypeTag, Value, classify};
//!
//! assert_eq!(classify(Some(&Value::from(3.5))), TypeTag::Number);
//! assert_eq!(classify(Some(&Value::from(vec![1, 2]))), TypeTag::Array);
//! assert_eq!(classify(None), TypeTag::Undefined);
//! assert_eq!("regex".parse::<TypeTag>().unwrap(), TypeTag::Regex);
//! ```

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Closed set of semantic type tags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Array,
    Regex,
    Date,
    Null,
    Function,
    Object,
    Number,
    String,
    Boolean,
    Symbol,
    Undefined,
}

impl TypeTag {
    /// Every tag, in discrimination order.
    pub const ALL: [Self; 11] = [
        Self::Array,
        Self::Regex,
        Self::Date,
        Self::Null,
        Self::Function,
        Self::Object,
        Self::Number,
        Self::String,
        Self::Boolean,
        Self::Symbol,
        Self::Undefined,
    ];

    /// Classifies a present value.
    ///
    /// Arrays, regexes and dates are reported under their own tags rather
    /// than folded into `object`; only maps are `object`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self::Array,
            Value::Regex(_) => Self::Regex,
            Value::Date(_) => Self::Date,
            Value::Null => Self::Null,
            Value::Function(_) => Self::Function,
            Value::Object(_) => Self::Object,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Bool(_) => Self::Boolean,
            Value::Symbol(_) => Self::Symbol,
        }
    }

    /// Stable lowercase name, used in failure parameters and messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Regex => "regex",
            Self::Date => "date",
            Self::Null => "null",
            Self::Function => "function",
            Self::Object => "object",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Symbol => "symbol",
            Self::Undefined => "undefined",
        }
    }
}

/// Classifies an optional value; absence is [`TypeTag::Undefined`].
#[must_use]
pub fn classify(value: Option<&Value>) -> TypeTag {
    value.map_or(TypeTag::Undefined, TypeTag::of)
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag `{0}`")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_owned()))
    }
}
