//! Type checking options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::TypeChecking;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("allowUnreachableCode", OptionKind::Boolean, C)
        .since("1.8")
        .describe("Controls how unreachable code is reported: unset suggests, true ignores, false errors."),
    OptionDefinition::new("allowUnusedLabels", OptionKind::Boolean, C)
        .since("1.8")
        .describe("Controls how unused labels are reported: unset suggests, true ignores, false errors."),
    OptionDefinition::new("alwaysStrict", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.1")
        .related(&["strict"])
        .describe("Parse every file in ECMAScript strict mode and emit \"use strict\"."),
    OptionDefinition::new("exactOptionalPropertyTypes", OptionKind::Boolean, C)
        .default_bool(true)
        .since("4.4")
        .describe("Treat optional properties as absent-or-typed, never implicitly undefined."),
    OptionDefinition::new("noFallthroughCasesInSwitch", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.8")
        .describe("Report non-empty switch cases that fall through to the next case."),
    OptionDefinition::new("noImplicitAny", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.0")
        .related(&["strict"])
        .describe("Report an error wherever a type would silently be inferred as any."),
    OptionDefinition::new("noImplicitOverride", OptionKind::Boolean, C)
        .default_bool(true)
        .since("4.3")
        .describe("Require the override keyword on members that override a base class member."),
    OptionDefinition::new("noImplicitReturns", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.8")
        .describe("Require every code path of a function to return a value."),
    OptionDefinition::new("noImplicitThis", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.0")
        .related(&["strict"])
        .describe("Report 'this' expressions whose type would be an implied any."),
    OptionDefinition::new("noPropertyAccessFromIndexSignature", OptionKind::Boolean, C)
        .default_bool(false)
        .since("4.2")
        .describe("Require bracket access for properties that only exist through an index signature."),
    OptionDefinition::new("noUncheckedIndexedAccess", OptionKind::Boolean, C)
        .default_bool(true)
        .since("4.1")
        .describe("Add undefined to the type of values read through an index signature."),
    OptionDefinition::new("noUnusedLocals", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.0")
        .describe("Report unused local variables."),
    OptionDefinition::new("noUnusedParameters", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.0")
        .describe("Report unused function parameters."),
    OptionDefinition::new("strict", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.3")
        .related(&["alwaysStrict", "strictNullChecks", "strictBindCallApply", "strictBuiltinIteratorReturn", "strictFunctionTypes", "strictPropertyInitialization", "noImplicitAny", "noImplicitThis", "useUnknownInCatchVariables"])
        .describe("Enable the whole strict-mode family of type checking options."),
    OptionDefinition::new("strictBindCallApply", OptionKind::Boolean, C)
        .default_bool(true)
        .since("3.2")
        .related(&["strict"])
        .describe("Type-check the arguments passed to call, bind and apply."),
    OptionDefinition::new("strictBuiltinIteratorReturn", OptionKind::Boolean, C)
        .default_bool(true)
        .since("5.6")
        .related(&["strict"])
        .describe("Type built-in iterator return values as undefined instead of any."),
    OptionDefinition::new("strictFunctionTypes", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.6")
        .related(&["strict"])
        .describe("Check function parameter types contravariantly."),
    OptionDefinition::new("strictNullChecks", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.0")
        .related(&["strict"])
        .describe("Give null and undefined their own distinct types."),
    OptionDefinition::new("strictPropertyInitialization", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.7")
        .related(&["strict"])
        .describe("Require class properties to be initialized in the constructor."),
    OptionDefinition::new("useUnknownInCatchVariables", OptionKind::Boolean, C)
        .default_bool(true)
        .since("4.4")
        .related(&["strict"])
        .describe("Type catch clause variables as unknown instead of any."),
];
