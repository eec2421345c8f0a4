//! Module resolution options.

use crate::registry::definition::{Category, Constraint, OptionDefinition, OptionKind};

const C: Category = Category::Modules;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("allowArbitraryExtensions", OptionKind::Boolean, C)
        .default_bool(false)
        .since("5.0")
        .describe("Resolve imports with unknown extensions through a {basename}.d.{ext}.ts declaration file."),
    OptionDefinition::new("allowImportingTsExtensions", OptionKind::Boolean, C)
        .default_bool(false)
        .since("5.0")
        .related(&["noEmit", "emitDeclarationOnly"])
        .describe("Allow imports that spell out .ts, .mts or .tsx extensions. Only valid without JavaScript emit.")
        .constraint(Constraint::RequiresAnyTrue(&["noEmit", "emitDeclarationOnly"])),
    OptionDefinition::new("allowUmdGlobalAccess", OptionKind::Boolean, C)
        .default_bool(false)
        .since("3.5")
        .describe("Allow module files to reference UMD exports as globals."),
    OptionDefinition::new("baseUrl", OptionKind::String, C)
        .since("2.0")
        .related(&["paths"])
        .examples(&["\".\"", "\"src\"", "\"./lib\""])
        .describe("Base directory used to resolve bare module specifiers."),
    OptionDefinition::new("customConditions", OptionKind::Array, C)
        .since("5.0")
        .related(&["moduleResolution", "resolvePackageJsonExports", "resolvePackageJsonImports"])
        .examples(&["[\"my-condition\"]", "[\"development\", \"custom\"]"])
        .describe("Extra conditions to match when resolving package.json exports and imports."),
    OptionDefinition::new("module", OptionKind::String, C)
        .default_str("NodeNext")
        .choices(&["none", "commonjs", "amd", "umd", "system", "es6", "es2015", "es2020", "es2022", "esnext", "node16", "node18", "nodenext", "preserve"])
        .since("1.0")
        .related(&["moduleResolution", "esModuleInterop"])
        .examples(&["\"NodeNext\"", "\"preserve\"", "\"ES2022\""])
        .describe("Module system of the emitted program."),
    OptionDefinition::new("moduleResolution", OptionKind::String, C)
        .default_str("NodeNext")
        .choices(&["classic", "node10", "node", "node16", "nodenext", "bundler"])
        .since("1.6")
        .related(&["module", "paths", "baseUrl"])
        .examples(&["\"NodeNext\"", "\"bundler\"", "\"node16\""])
        .describe("Strategy used to resolve module specifiers."),
    OptionDefinition::new("moduleSuffixes", OptionKind::Array, C)
        .since("4.7")
        .examples(&["[\".ios\", \".native\", \"\"]", "[\".android\", \".native\", \"\"]", "[\".web\", \"\"]"])
        .describe("File name suffixes to try, in order, when resolving a module."),
    OptionDefinition::new("noResolve", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .describe("Do not add files found through imports and triple-slash references to the program."),
    OptionDefinition::new("noUncheckedSideEffectImports", OptionKind::Boolean, C)
        .default_bool(true)
        .since("5.6")
        .describe("Report side effect imports that cannot be resolved to a file."),
    OptionDefinition::new("paths", OptionKind::Object, C)
        .since("2.0")
        .related(&["baseUrl"])
        .examples(&["{\"@/*\": [\"./src/*\"]}", "{\"utils/*\": [\"./src/utils/*\"]}", "{\"@components/*\": [\"./src/components/*\"]}"])
        .describe("Remap import specifiers to lookup locations."),
    OptionDefinition::new("resolveJsonModule", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.9")
        .describe("Allow importing .json files with a type derived from their contents."),
    OptionDefinition::new("resolvePackageJsonExports", OptionKind::Boolean, C)
        .default_bool(true)
        .since("5.0")
        .related(&["moduleResolution", "customConditions", "resolvePackageJsonImports"])
        .describe("Consult the exports field of package.json files in node_modules."),
    OptionDefinition::new("resolvePackageJsonImports", OptionKind::Boolean, C)
        .default_bool(true)
        .since("5.0")
        .related(&["moduleResolution", "customConditions", "resolvePackageJsonExports"])
        .describe("Consult the imports field of package.json for specifiers starting with #."),
    OptionDefinition::new("rewriteRelativeImportExtensions", OptionKind::Boolean, C)
        .default_bool(false)
        .since("5.7")
        .describe("Rewrite .ts, .tsx, .mts and .cts extensions of relative imports to their JavaScript form."),
    OptionDefinition::new("rootDir", OptionKind::String, C)
        .since("1.5")
        .related(&["outDir"])
        .examples(&["\"src\"", "\".\"", "\"lib\""])
        .describe("Root directory of the input files; output mirrors its structure."),
    OptionDefinition::new("rootDirs", OptionKind::Array, C)
        .since("2.0")
        .examples(&["[\"src/views\", \"generated/templates/views\"]", "[\"src\", \"generated\"]"])
        .describe("Directories merged into one virtual root for relative module resolution."),
    OptionDefinition::new("typeRoots", OptionKind::Array, C)
        .since("2.0")
        .related(&["types"])
        .examples(&["[\"./typings\", \"./vendor/types\"]", "[\"./types\"]"])
        .describe("Directories to search for type packages instead of every visible @types folder."),
    OptionDefinition::new("types", OptionKind::Array, C)
        .since("2.0")
        .related(&["typeRoots"])
        .examples(&["[\"node\", \"jest\", \"express\"]", "[\"node\"]", "[]"])
        .describe("Type packages to include in the global scope instead of every visible @types package."),
];
