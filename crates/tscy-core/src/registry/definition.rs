//! Option definition metadata.
//!
//! Definitions are plain `const` data. The builder-style methods are `const fn`
//! so the category tables can be declared as static slices.

use std::fmt;

use crate::options::CompilerOptions;
use crate::value::OptionValue;

/// The declared value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Boolean,
    String,
    Number,
    /// A list of strings.
    Array,
    /// A map of string keys to string lists (e.g. `paths`).
    Object,
}

impl OptionKind {
    /// Name used in help output and type-mismatch errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Boolean => "boolean",
            OptionKind::String => "string",
            OptionKind::Number => "number",
            OptionKind::Array => "array",
            OptionKind::Object => "object",
        }
    }

    /// Placeholder shown after the flag in usage output.
    pub fn value_name(&self) -> &'static str {
        match self {
            OptionKind::Boolean => "BOOL",
            OptionKind::String => "STRING",
            OptionKind::Number => "NUMBER",
            OptionKind::Array => "LIST",
            OptionKind::Object => "JSON",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve option categories, in registry merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    TypeChecking,
    Modules,
    Emit,
    JavaScriptSupport,
    EditorSupport,
    InteropConstraints,
    BackwardsCompatibility,
    LanguageAndEnvironment,
    CompilerDiagnostics,
    Projects,
    OutputFormatting,
    Completeness,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::TypeChecking,
        Category::Modules,
        Category::Emit,
        Category::JavaScriptSupport,
        Category::EditorSupport,
        Category::InteropConstraints,
        Category::BackwardsCompatibility,
        Category::LanguageAndEnvironment,
        Category::CompilerDiagnostics,
        Category::Projects,
        Category::OutputFormatting,
        Category::Completeness,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::TypeChecking => "Type Checking",
            Category::Modules => "Modules",
            Category::Emit => "Emit",
            Category::JavaScriptSupport => "JavaScript Support",
            Category::EditorSupport => "Editor Support",
            Category::InteropConstraints => "Interop Constraints",
            Category::BackwardsCompatibility => "Backwards Compatibility",
            Category::LanguageAndEnvironment => "Language and Environment",
            Category::CompilerDiagnostics => "Compiler Diagnostics",
            Category::Projects => "Projects",
            Category::OutputFormatting => "Output Formatting",
            Category::Completeness => "Completeness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A declared default value.
///
/// Kept separate from [`OptionValue`] so definitions stay `const`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Str(&'static str),
    Number(f64),
    List(&'static [&'static str]),
}

impl DefaultValue {
    pub fn to_value(&self) -> OptionValue {
        match *self {
            DefaultValue::Bool(b) => OptionValue::Bool(b),
            DefaultValue::Str(s) => OptionValue::String(s.to_string()),
            DefaultValue::Number(n) => OptionValue::Number(n),
            DefaultValue::List(items) => {
                OptionValue::List(items.iter().map(|s| s.to_string()).collect())
            }
        }
    }

    fn matches(&self, kind: OptionKind) -> bool {
        matches!(
            (self, kind),
            (DefaultValue::Bool(_), OptionKind::Boolean)
                | (DefaultValue::Str(_), OptionKind::String)
                | (DefaultValue::Number(_), OptionKind::Number)
                | (DefaultValue::List(_), OptionKind::Array)
        )
    }
}

/// A rule scoped to a single option that may look at the other assembled options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// When the option is truthy, at least one of these flags must be `true`.
    RequiresAnyTrue(&'static [&'static str]),
    /// When the option is set and `option` is set, `option` must be one of `allowed`.
    RequiresOneOf {
        option: &'static str,
        allowed: &'static [&'static str],
    },
}

impl Constraint {
    /// Checks the rule for `name = value` against the assembled options.
    ///
    /// Returns the human-readable reason on failure.
    pub fn check(
        &self,
        name: &str,
        value: &OptionValue,
        options: &CompilerOptions,
    ) -> Result<(), String> {
        if !value.is_truthy() {
            return Ok(());
        }
        match self {
            Constraint::RequiresAnyTrue(flags) => {
                if flags.iter().any(|flag| options.is_true(flag)) {
                    Ok(())
                } else {
                    Err(format!("{} requires {}", name, flags.join(" or ")))
                }
            }
            Constraint::RequiresOneOf { option, allowed } => match options.get_str(option) {
                Some(current) if !allowed.iter().any(|a| a.eq_ignore_ascii_case(current)) => {
                    Err(format!(
                        "{} can only be used with {}: {}",
                        name,
                        option,
                        join_or(allowed)
                    ))
                }
                _ => Ok(()),
            },
        }
    }
}

/// `["a", "b", "c"]` → `"a, b, or c"`.
fn join_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => format!("{}, or {}", head.join(", "), last),
    }
}

/// Static metadata describing one configuration option.
#[derive(Debug, Clone, Copy)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub kind: OptionKind,
    pub category: Category,
    pub default: Option<DefaultValue>,
    pub choices: Option<&'static [&'static str]>,
    pub description: &'static str,
    pub since: Option<&'static str>,
    pub deprecated: bool,
    pub related: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub constraint: Option<Constraint>,
}

impl OptionDefinition {
    pub const fn new(name: &'static str, kind: OptionKind, category: Category) -> Self {
        Self {
            name,
            kind,
            category,
            default: None,
            choices: None,
            description: "",
            since: None,
            deprecated: false,
            related: &[],
            examples: &[],
            constraint: None,
        }
    }

    pub const fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(DefaultValue::Bool(value));
        self
    }

    pub const fn default_str(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Str(value));
        self
    }

    pub const fn default_number(mut self, value: f64) -> Self {
        self.default = Some(DefaultValue::Number(value));
        self
    }

    pub const fn default_list(mut self, value: &'static [&'static str]) -> Self {
        self.default = Some(DefaultValue::List(value));
        self
    }

    pub const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }

    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn since(mut self, version: &'static str) -> Self {
        self.since = Some(version);
        self
    }

    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub const fn related(mut self, related: &'static [&'static str]) -> Self {
        self.related = related;
        self
    }

    pub const fn examples(mut self, examples: &'static [&'static str]) -> Self {
        self.examples = examples;
        self
    }

    pub const fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Case-insensitive membership test against `choices`.
    ///
    /// Options without choices accept anything.
    pub fn accepts_choice(&self, value: &str) -> bool {
        match self.choices {
            Some(choices) => choices.iter().any(|c| c.eq_ignore_ascii_case(value)),
            None => true,
        }
    }

    /// Checks the definition's own invariants.
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if let Some(choices) = self.choices {
            if choices.is_empty() {
                return Err("choices must not be empty".to_string());
            }
            if self.kind != OptionKind::String {
                return Err("choices are only allowed on string options".to_string());
            }
        }
        if let Some(default) = &self.default {
            if !default.matches(self.kind) {
                return Err(format!("default does not match declared type {}", self.kind));
            }
            if let DefaultValue::Str(value) = default {
                if !self.accepts_choice(value) {
                    return Err(format!("default '{}' is not one of its choices", value));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or() {
        assert_eq!(join_or(&["none"]), "none");
        assert_eq!(join_or(&["none", "system", "amd"]), "none, system, or amd");
    }

    #[test]
    fn test_default_outside_choices_is_rejected() {
        let def = OptionDefinition::new("newLine", OptionKind::String, Category::Emit)
            .choices(&["crlf", "lf"])
            .default_str("cr");
        assert!(def.check_invariants().is_err());
    }

    #[test]
    fn test_choice_match_ignores_case() {
        let def = OptionDefinition::new("module", OptionKind::String, Category::Modules)
            .choices(&["nodenext", "esnext"])
            .default_str("NodeNext");
        assert!(def.accepts_choice("NODENEXT"));
        assert!(def.check_invariants().is_ok());
    }

    #[test]
    fn test_mismatched_default_type_is_rejected() {
        let def = OptionDefinition::new("strict", OptionKind::Boolean, Category::TypeChecking)
            .default_str("yes");
        assert!(def.check_invariants().is_err());
    }
}
