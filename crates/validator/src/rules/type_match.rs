//! Type-tag matching.

use crate::foundation::RuleParameter;
use crate::value::TypeTag;

crate::rule! {
    /// Passes when the value classifies as `expected`.
    pub TypeMatch { expected: TypeTag } => Type;
    parameter(self) { RuleParameter::Expected(self.expected.name()) }
    check(self, value) { value.type_tag() == self.expected }
}
