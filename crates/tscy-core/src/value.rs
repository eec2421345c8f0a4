//! Typed option values.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::registry::OptionKind;

/// A parsed, typed value for a known compiler option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    String(String),
    Number(f64),
    List(Vec<String>),
    Map(IndexMap<String, Vec<String>>),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// JavaScript-style truthiness: `false`, `0`, and `""` are falsy.
    ///
    /// Lists and maps are always truthy, matching how the rules treat "set".
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::String(s) => !s.is_empty(),
            OptionValue::Number(n) => *n != 0.0 && !n.is_nan(),
            OptionValue::List(_) | OptionValue::Map(_) => true,
        }
    }

    /// Converts a JSON value into a typed value of the given kind.
    ///
    /// Returns `None` when the JSON shape does not fit `kind`.
    pub fn from_json(kind: OptionKind, value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;
        match (kind, value) {
            (OptionKind::Boolean, Value::Bool(b)) => Some(OptionValue::Bool(*b)),
            (OptionKind::String, Value::String(s)) => Some(OptionValue::String(s.clone())),
            (OptionKind::Number, Value::Number(n)) => n.as_f64().map(OptionValue::Number),
            (OptionKind::Array, Value::Array(items)) => string_list(items).map(OptionValue::List),
            (OptionKind::Object, Value::Object(map)) => {
                let mut out = IndexMap::with_capacity(map.len());
                for (key, entry) in map {
                    let Value::Array(items) = entry else {
                        return None;
                    };
                    out.insert(key.clone(), string_list(items)?);
                }
                Some(OptionValue::Map(out))
            }
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of OptionValue is infallible.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Extracts a list of strings, or `None` when any element is not a string.
pub(crate) fn string_list(items: &[serde_json::Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Bool(b) => serializer.serialize_bool(*b),
            OptionValue::String(s) => serializer.serialize_str(s),
            OptionValue::Number(n) => {
                // Print integral numbers without a trailing ".0".
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            OptionValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            OptionValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, targets) in entries {
                    map.serialize_entry(key, targets)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}
