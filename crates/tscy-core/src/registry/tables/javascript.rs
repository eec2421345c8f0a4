//! JavaScript support options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::JavaScriptSupport;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("allowJs", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.8")
        .related(&["checkJs", "emitDeclarationOnly"])
        .describe("Allow JavaScript files to be part of the program."),
    OptionDefinition::new("checkJs", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.3")
        .related(&["allowJs", "emitDeclarationOnly"])
        .describe("Report type errors in JavaScript files. Works together with allowJs."),
    OptionDefinition::new("maxNodeModuleJsDepth", OptionKind::Number, C)
        .default_number(0.0)
        .since("2.0")
        .related(&["allowJs"])
        .examples(&["0", "1", "2"])
        .describe("How deep to search node_modules for JavaScript files to load."),
];
