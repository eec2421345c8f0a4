//! Emit options.

use crate::registry::definition::{Category, Constraint, OptionDefinition, OptionKind};

const C: Category = Category::Emit;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("declaration", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .related(&["declarationDir", "emitDeclarationOnly"])
        .describe("Generate .d.ts files for every TypeScript or JavaScript input."),
    OptionDefinition::new("declarationDir", OptionKind::String, C)
        .since("2.0")
        .related(&["declaration"])
        .examples(&["\"./types\"", "\"./dist/types\""])
        .describe("Output directory for generated declaration files."),
    OptionDefinition::new("declarationMap", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.9")
        .related(&["declaration", "sourceMap"])
        .describe("Generate source maps for .d.ts files pointing back at the .ts sources."),
    OptionDefinition::new("downlevelIteration", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.3")
        .related(&["importHelpers"])
        .describe("Emit spec-accurate iteration helpers when targeting older JavaScript."),
    OptionDefinition::new("emitBOM", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .describe("Write a byte order mark at the start of output files."),
    OptionDefinition::new("emitDeclarationOnly", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.8")
        .related(&["declaration"])
        .describe("Emit only .d.ts files, no JavaScript."),
    OptionDefinition::new("importHelpers", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.1")
        .related(&["noEmitHelpers", "downlevelIteration"])
        .describe("Import downleveling helpers from tslib instead of inlining them."),
    OptionDefinition::new("inlineSourceMap", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .related(&["sourceMap", "inlineSources"])
        .describe("Embed source maps in the emitted .js files instead of writing .js.map files."),
    OptionDefinition::new("inlineSources", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .related(&["sourceMap", "inlineSourceMap"])
        .describe("Embed the original .ts sources inside the source maps."),
    OptionDefinition::new("mapRoot", OptionKind::String, C)
        .since("1.0")
        .related(&["sourceMap", "sourceRoot"])
        .examples(&["\"https://my-website.com/debug/sourcemaps/\"", "\"../maps/\"", "\"/debug/maps/\""])
        .describe("Location the debugger should use to find map files."),
    OptionDefinition::new("newLine", OptionKind::String, C)
        .default_str("lf")
        .choices(&["crlf", "lf"])
        .since("1.5")
        .examples(&["\"lf\"", "\"crlf\""])
        .describe("End of line sequence used for emitted files."),
    OptionDefinition::new("noEmit", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .describe("Do not emit JavaScript, source maps or declarations."),
    OptionDefinition::new("noEmitHelpers", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .related(&["importHelpers"])
        .describe("Do not emit helper functions; they are expected to exist globally."),
    OptionDefinition::new("noEmitOnError", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.4")
        .describe("Skip emitting output when any errors were reported."),
    OptionDefinition::new("outDir", OptionKind::String, C)
        .since("1.0")
        .related(&["rootDir", "outFile"])
        .examples(&["\"dist\"", "\"build\"", "\"./output\""])
        .describe("Output directory for emitted files."),
    OptionDefinition::new("outFile", OptionKind::String, C)
        .since("1.6")
        .related(&["module", "outDir"])
        .examples(&["\"bundle.js\"", "\"dist/app.js\""])
        .describe("Concatenate all global (non-module) output into one file.")
        .constraint(Constraint::RequiresOneOf {
            option: "module",
            allowed: &["none", "system", "amd"],
        }),
    OptionDefinition::new("preserveConstEnums", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.4")
        .describe("Keep const enum declarations in the emitted code."),
    OptionDefinition::new("removeComments", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .describe("Strip comments from the emitted JavaScript."),
    OptionDefinition::new("sourceMap", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .related(&["inlineSourceMap", "mapRoot", "sourceRoot"])
        .describe("Generate .js.map source map files."),
    OptionDefinition::new("sourceRoot", OptionKind::String, C)
        .since("1.0")
        .related(&["sourceMap", "mapRoot"])
        .examples(&["\"https://my-website.com/debug/source/\"", "\"../src/\"", "\"/debug/src/\""])
        .describe("Location the debugger should use to find TypeScript sources."),
    OptionDefinition::new("stripInternal", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .describe("Do not emit declarations for code marked @internal."),
];
