//! Raw flag value parsing.
//!
//! Command-line values always arrive as strings. [`parse_value`] coerces them
//! to the type an option declares.

use indexmap::IndexMap;
use thiserror::Error;

use crate::registry::{OptionDefinition, OptionKind};
use crate::value::{string_list, OptionValue};

/// A raw value that cannot be coerced to an option's declared type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid boolean value: {value}. Expected 'true' or 'false'")]
    InvalidBoolean { value: String },

    #[error("Invalid number value: {value}")]
    InvalidNumber { value: String },

    #[error("Invalid choice: {value}. Expected one of: {}", choices.join(", "))]
    InvalidChoice {
        value: String,
        choices: Vec<String>,
    },

    #[error("Invalid JSON object: {value}")]
    InvalidObject { value: String },
}

/// Parses `raw` according to `definition`.
pub fn parse_value(raw: &str, definition: &OptionDefinition) -> Result<OptionValue, ParseError> {
    match definition.kind {
        OptionKind::Boolean => parse_bool(raw),
        OptionKind::Number => parse_number(raw),
        OptionKind::String => {
            if !definition.accepts_choice(raw) {
                return Err(ParseError::InvalidChoice {
                    value: raw.to_string(),
                    choices: definition
                        .choices
                        .unwrap_or_default()
                        .iter()
                        .map(|c| c.to_string())
                        .collect(),
                });
            }
            Ok(OptionValue::String(raw.to_string()))
        }
        OptionKind::Array => Ok(OptionValue::List(parse_list(raw))),
        OptionKind::Object => parse_object(raw),
    }
}

pub fn parse_bool(raw: &str) -> Result<OptionValue, ParseError> {
    match raw {
        "true" => Ok(OptionValue::Bool(true)),
        "false" => Ok(OptionValue::Bool(false)),
        _ => Err(ParseError::InvalidBoolean {
            value: raw.to_string(),
        }),
    }
}

fn parse_number(raw: &str) -> Result<OptionValue, ParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(OptionValue::Number)
        .ok_or_else(|| ParseError::InvalidNumber {
            value: raw.to_string(),
        })
}

/// Parses a list from a JSON array, falling back to comma splitting.
///
/// Never fails. Array items that are not strings keep their JSON text
/// (`5`, `true`). Input that is not a JSON array is split on commas, with
/// each entry trimmed and empty entries dropped.
pub fn parse_list(raw: &str) -> Vec<String> {
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(raw) {
        return items.into_iter().map(item_text).collect();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn item_text(item: serde_json::Value) -> String {
    match item {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

fn parse_object(raw: &str) -> Result<OptionValue, ParseError> {
    let invalid = || ParseError::InvalidObject {
        value: raw.to_string(),
    };

    let parsed: serde_json::Value = serde_json::from_str(raw).map_err(|_| invalid())?;
    let serde_json::Value::Object(map) = parsed else {
        return Err(invalid());
    };

    let mut entries = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        let targets = match value {
            serde_json::Value::Array(items) => string_list(&items).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        entries.insert(key, targets);
    }
    Ok(OptionValue::Map(entries))
}
