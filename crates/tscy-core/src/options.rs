//! Assembled compiler options.
//!
//! Options are split in two tiers:
//!
//! - `known`: names the registry defines, holding typed [`OptionValue`]s
//! - `extra`: names the registry does not know, kept as raw JSON
//!
//! Unknown names are tolerated so configs written for newer compilers still
//! round-trip; the validator reports them as warnings.

use indexmap::IndexMap;

use crate::diagnostic::GeneratorError;
use crate::registry::{OptionDefinition, Registry};
use crate::value::OptionValue;

/// The `compilerOptions` of one configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOptions {
    known: IndexMap<&'static str, OptionValue>,
    extra: IndexMap<String, serde_json::Value>,
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a JSON object, splitting known and unknown keys.
    ///
    /// Known keys must carry a value of their declared type.
    pub fn from_json(
        registry: &Registry,
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, GeneratorError> {
        let mut options = Self::new();
        for (key, value) in object {
            match registry.get(key) {
                Some(def) => {
                    let typed = OptionValue::from_json(def.kind, value).ok_or_else(|| {
                        GeneratorError::TypeMismatch {
                            option: key.clone(),
                            expected: def.kind.to_string(),
                        }
                    })?;
                    options.insert(def, typed);
                }
                None => options.insert_unknown(key.clone(), value.clone()),
            }
        }
        Ok(options)
    }

    /// Sets a known option. Replacing a value keeps its original position.
    pub fn insert(&mut self, definition: &OptionDefinition, value: OptionValue) {
        self.known.insert(definition.name, value);
    }

    pub fn insert_unknown(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.extra.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.known.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.known.contains_key(name) || self.extra.contains_key(name)
    }

    /// `true` only when the option is set to boolean `true`.
    pub fn is_true(&self, name: &str) -> bool {
        matches!(self.known.get(name), Some(OptionValue::Bool(true)))
    }

    /// `true` only when the option is set to boolean `false`.
    pub fn is_false(&self, name: &str) -> bool {
        matches!(self.known.get(name), Some(OptionValue::Bool(false)))
    }

    /// `true` when the option is present with a truthy value.
    pub fn is_set(&self, name: &str) -> bool {
        self.known.get(name).is_some_and(OptionValue::is_truthy)
    }

    /// Returns a non-empty string value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.known
            .get(name)
            .and_then(OptionValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Case-insensitive comparison of a string option.
    pub fn str_eq(&self, name: &str, expected: &str) -> bool {
        self.get_str(name)
            .is_some_and(|value| value.eq_ignore_ascii_case(expected))
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.known.get(name).and_then(OptionValue::as_list)
    }

    /// Known options in insertion order.
    pub fn known(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> {
        self.known.iter().map(|(name, value)| (*name, value))
    }

    /// Unknown options in insertion order.
    pub fn extra(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.extra.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.extra.is_empty()
    }
}
