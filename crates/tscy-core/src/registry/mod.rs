//! The option registry.
//!
//! Every supported compiler option is declared once in a category table under
//! `tables/`. [`Registry::new`] merges the tables in a fixed order and refuses
//! to build when two tables declare the same name, so a collision can never
//! silently replace a definition.

mod definition;
mod tables;

use indexmap::IndexMap;
use tracing::debug;

use crate::diagnostic::GeneratorError;

pub use definition::{Category, Constraint, DefaultValue, OptionDefinition, OptionKind};

/// Immutable catalog of option definitions.
#[derive(Debug, Clone)]
pub struct Registry {
    options: IndexMap<&'static str, &'static OptionDefinition>,
}

impl Registry {
    /// Builds the registry from the built-in category tables.
    pub fn new() -> Result<Self, GeneratorError> {
        Self::from_tables(tables::ALL)
    }

    /// Builds a registry from explicit tables, in the given order.
    pub fn from_tables(
        tables: &[&'static [OptionDefinition]],
    ) -> Result<Self, GeneratorError> {
        let mut options: IndexMap<&'static str, &'static OptionDefinition> = IndexMap::new();

        for &table in tables {
            for definition in table {
                definition
                    .check_invariants()
                    .map_err(|reason| GeneratorError::InvalidDefinition {
                        name: definition.name.to_string(),
                        reason,
                    })?;

                if let Some(existing) = options.get(definition.name) {
                    return Err(GeneratorError::DuplicateOption {
                        name: definition.name.to_string(),
                        first: existing.category,
                        second: definition.category,
                    });
                }
                options.insert(definition.name, definition);
            }
        }

        debug!(options = options.len(), "option registry built");
        Ok(Self { options })
    }

    pub fn get(&self, name: &str) -> Option<&'static OptionDefinition> {
        self.options.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// All definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static OptionDefinition> + '_ {
        self.options.values().copied()
    }

    /// Definitions of one category, in registration order.
    pub fn category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static OptionDefinition> + '_ {
        self.iter().filter(move |def| def.category == category)
    }

    /// Non-empty categories with their definitions, in merge order.
    pub fn by_category(&self) -> Vec<(Category, Vec<&'static OptionDefinition>)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.category(*category).collect::<Vec<_>>()))
            .filter(|(_, defs)| !defs.is_empty())
            .collect()
    }

    /// Option names sorted alphabetically.
    pub fn sorted_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.options.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIRST: [OptionDefinition; 1] =
        [OptionDefinition::new("strict", OptionKind::Boolean, Category::TypeChecking)];
    static SECOND: [OptionDefinition; 1] =
        [OptionDefinition::new("strict", OptionKind::Boolean, Category::Completeness)];

    #[test]
    fn test_builtin_registry_builds() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.len(), 115);
        assert_eq!(registry.by_category().len(), 12);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = Registry::from_tables(&[&FIRST, &SECOND]);
        match result {
            Err(GeneratorError::DuplicateOption { name, first, second }) => {
                assert_eq!(name, "strict");
                assert_eq!(first, Category::TypeChecking);
                assert_eq!(second, Category::Completeness);
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_members_of_choices() {
        let registry = Registry::new().unwrap();
        for def in registry.iter() {
            if let (Some(DefaultValue::Str(default)), Some(_)) = (def.default, def.choices) {
                assert!(def.accepts_choice(default), "{} default not in choices", def.name);
            }
        }
    }

    #[test]
    fn test_registration_order_starts_with_type_checking() {
        let registry = Registry::new().unwrap();
        let first = registry.iter().next().unwrap();
        assert_eq!(first.name, "allowUnreachableCode");
        assert_eq!(first.category, Category::TypeChecking);
    }

    #[test]
    fn test_sorted_names() {
        let registry = Registry::new().unwrap();
        let names = registry.sorted_names();
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
