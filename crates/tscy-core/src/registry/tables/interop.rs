//! Interop constraint options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::InteropConstraints;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("allowSyntheticDefaultImports", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.8")
        .related(&["esModuleInterop"])
        .describe("Allow default imports from modules without a default export."),
    OptionDefinition::new("erasableSyntaxOnly", OptionKind::Boolean, C)
        .default_bool(false)
        .since("5.8")
        .related(&["verbatimModuleSyntax"])
        .describe("Only allow TypeScript syntax that can be erased without changing runtime behavior."),
    OptionDefinition::new("esModuleInterop", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.7")
        .related(&["allowSyntheticDefaultImports"])
        .describe("Emit interop helpers so CommonJS modules can be imported like ES modules."),
    OptionDefinition::new("forceConsistentCasingInFileNames", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.8")
        .describe("Require imports to use the exact casing of the file on disk."),
    OptionDefinition::new("isolatedDeclarations", OptionKind::Boolean, C)
        .default_bool(false)
        .since("5.5")
        .describe("Require enough annotations on exports for declarations to be generated file by file."),
    OptionDefinition::new("isolatedModules", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.5")
        .describe("Report constructs that single-file transpilers cannot handle correctly."),
    OptionDefinition::new("preserveSymlinks", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.5")
        .describe("Do not resolve symlinks to their real path."),
    OptionDefinition::new("verbatimModuleSyntax", OptionKind::Boolean, C)
        .default_bool(true)
        .since("5.0")
        .related(&["isolatedModules"])
        .describe("Emit imports and exports exactly as written, dropping only those marked type."),
];
