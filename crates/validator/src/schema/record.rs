//! Records: anything a field value can be looked up in.

use crate::value::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Keyed access to the values being validated.
///
/// `None` means the field is absent, which is distinct from a present
/// [`Value::Null`].
pub trait Record {
    fn field(&self, key: &str) -> Option<Value>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<Value> {
        (**self).field(key)
    }
}

impl<S: BuildHasher> Record for IndexMap<String, Value, S> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// Objects expose their entries; any other value has no fields.
impl Record for Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.get(key)).cloned()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).map(Value::from)
    }
}

/// Objects expose their entries; any other value has no fields.
impl Record for serde_json::Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.field(key))
    }
}
