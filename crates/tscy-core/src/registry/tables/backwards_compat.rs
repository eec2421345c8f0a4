//! Backwards compatibility options.
//!
//! Most of these are deprecated and only kept so existing configs validate.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::BackwardsCompatibility;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("charset", OptionKind::String, C)
        .default_str("utf8")
        .since("1.0")
        .deprecated()
        .examples(&["\"utf8\"", "\"utf16\""])
        .describe("Encoding used when reading text files. No longer has any effect."),
    OptionDefinition::new("importsNotUsedAsValues", OptionKind::String, C)
        .default_str("remove")
        .choices(&["remove", "preserve", "error"])
        .since("3.8")
        .deprecated()
        .related(&["preserveValueImports", "verbatimModuleSyntax"])
        .examples(&["\"remove\"", "\"preserve\"", "\"error\""])
        .describe("Controls emit of imports used only as types. Replaced by verbatimModuleSyntax."),
    OptionDefinition::new("keyofStringsOnly", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.9")
        .deprecated()
        .describe("Make keyof on string index signatures return string instead of string | number."),
    OptionDefinition::new("noImplicitUseStrict", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.8")
        .describe("Do not emit \"use strict\" in non-ES module output."),
    OptionDefinition::new("noStrictGenericChecks", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.5")
        .describe("Disable strict checking of generic signatures in function types."),
    OptionDefinition::new("out", OptionKind::String, C)
        .since("1.0")
        .deprecated()
        .related(&["outDir", "outFile"])
        .examples(&["\"bundle.js\""])
        .describe("Concatenated output file. Replaced by outFile."),
    OptionDefinition::new("preserveValueImports", OptionKind::Boolean, C)
        .default_bool(false)
        .since("4.5")
        .deprecated()
        .related(&["isolatedModules", "importsNotUsedAsValues", "verbatimModuleSyntax"])
        .describe("Keep unused value imports in the output. Replaced by verbatimModuleSyntax."),
    OptionDefinition::new("suppressExcessPropertyErrors", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.6")
        .describe("Do not report excess properties in object literals."),
    OptionDefinition::new("suppressImplicitAnyIndexErrors", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.4")
        .related(&["noImplicitAny"])
        .describe("Do not report implicit any when indexing objects without an index signature."),
];
