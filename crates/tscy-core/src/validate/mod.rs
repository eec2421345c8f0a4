//! Validation of assembled configurations.
//!
//! Validation never fails outright. Problems are collected into a
//! [`ValidationResult`]; errors make the result invalid, warnings are advisory.

mod structure;

use std::fmt;

use tracing::debug;

use crate::document::ConfigDocument;
use crate::options::CompilerOptions;
use crate::registry::{OptionDefinition, Registry};
use crate::value::OptionValue;

/// One reported problem, optionally tied to an option name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub option: Option<String>,
    pub message: String,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            option: None,
            message: message.into(),
        }
    }

    pub fn for_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            option: Some(option.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of [`validate_config`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

/// Collects issues while the rules run.
#[derive(Debug, Default)]
pub(crate) struct Report {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl Report {
    pub(crate) fn error(&mut self, issue: Issue) {
        self.errors.push(issue);
    }

    /// Records an error unless one is already recorded for the same option,
    /// whatever its message.
    pub(crate) fn error_once(&mut self, issue: Issue) {
        let duplicate = issue.option.is_some()
            && self.errors.iter().any(|existing| existing.option == issue.option);
        if !duplicate {
            self.errors.push(issue);
        }
    }

    pub(crate) fn warn(&mut self, issue: Issue) {
        self.warnings.push(issue);
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// Runs an option's own constraint, if it declares one.
pub fn validate_value(
    value: &OptionValue,
    definition: &OptionDefinition,
    options: &CompilerOptions,
) -> Result<(), String> {
    match &definition.constraint {
        Some(constraint) => constraint.check(definition.name, value, options),
        None => Ok(()),
    }
}

/// Validates a whole document.
///
/// Runs the per-option pass and then the structural rules. The structural
/// rules may correct the document: a `composite` project gets
/// `declaration: true` added.
pub fn validate_config(document: &mut ConfigDocument, registry: &Registry) -> ValidationResult {
    let mut report = Report::default();
    let options = &document.compiler_options;

    for (name, value) in options.known() {
        let Some(definition) = registry.get(name) else {
            report.warn(Issue::for_option(name, format!("Unknown compiler option: {}", name)));
            continue;
        };

        if definition.deprecated {
            let message = if definition.related.is_empty() {
                format!("Option '{}' is deprecated", name)
            } else {
                format!(
                    "Option '{}' is deprecated. Consider using: {}",
                    name,
                    definition.related.join(", ")
                )
            };
            report.warn(Issue::for_option(name, message));
        }

        if let Err(reason) = validate_value(value, definition, options) {
            report.error(Issue::for_option(
                name,
                format!("Invalid value for '{}': {}", name, reason),
            ));
        }
    }

    for (name, _) in options.extra() {
        report.warn(Issue::for_option(name, format!("Unknown compiler option: {}", name)));
    }

    structure::check_cross_option_rules(&mut document.compiler_options, registry, &mut report);

    let result = report.finish();
    debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "configuration validated"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_once_skips_same_option_with_different_message() {
        let mut report = Report::default();
        report.error(Issue::for_option(
            "outFile",
            "Invalid value for 'outFile': outFile can only be used with module: none, system, or amd",
        ));
        report.error_once(Issue::for_option(
            "outFile",
            "outFile can only be used with module: none, system, or amd",
        ));
        report.error_once(Issue::for_option("module", "third"));
        report.error_once(Issue::new("fourth"));
        let result = report.finish();
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors[0].message.starts_with("Invalid value for 'outFile'"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_validate_value_without_constraint_passes() {
        let registry = Registry::new().unwrap();
        let strict = registry.get("strict").unwrap();
        assert!(validate_value(&OptionValue::Bool(true), strict, &CompilerOptions::new()).is_ok());
    }

    #[test]
    fn test_validate_value_delegates_to_constraint() {
        let registry = Registry::new().unwrap();
        let def = registry.get("allowImportingTsExtensions").unwrap();
        let reason = validate_value(&OptionValue::Bool(true), def, &CompilerOptions::new())
            .unwrap_err();
        assert_eq!(
            reason,
            "allowImportingTsExtensions requires noEmit or emitDeclarationOnly"
        );

        let mut options = CompilerOptions::new();
        options.insert(registry.get("noEmit").unwrap(), OptionValue::Bool(true));
        assert!(validate_value(&OptionValue::Bool(true), def, &options).is_ok());
    }
}
