//! Compiler diagnostics options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::CompilerDiagnostics;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("diagnostics", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .deprecated()
        .related(&["extendedDiagnostics"])
        .describe("Print diagnostic information after a build. Replaced by extendedDiagnostics."),
    OptionDefinition::new("explainFiles", OptionKind::Boolean, C)
        .default_bool(false)
        .since("4.2")
        .related(&["listFiles"])
        .describe("Print every file in the program and why it was included."),
    OptionDefinition::new("extendedDiagnostics", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.0")
        .related(&["diagnostics"])
        .describe("Print detailed timing and memory information after a build."),
    OptionDefinition::new("generateCpuProfile", OptionKind::String, C)
        .since("3.7")
        .examples(&["\"tsc-output.cpuprofile\"", "\"profile.cpuprofile\""])
        .describe("Write a V8 CPU profile of the compiler run to this file."),
    OptionDefinition::new("generateTrace", OptionKind::String, C)
        .since("4.1")
        .examples(&["\"trace\"", "\"./traces\""])
        .describe("Write an event trace and type list to this directory."),
    OptionDefinition::new("listEmittedFiles", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.0")
        .describe("Print the names of emitted files."),
    OptionDefinition::new("listFiles", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .related(&["explainFiles"])
        .describe("Print the names of files that are part of the compilation."),
    OptionDefinition::new("noCheck", OptionKind::Boolean, C)
        .default_bool(false)
        .since("5.6")
        .describe("Skip full type checking; only report parse and emit errors."),
    OptionDefinition::new("traceResolution", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.0")
        .describe("Log every step of module resolution."),
];
