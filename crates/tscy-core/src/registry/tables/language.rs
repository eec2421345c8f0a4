//! Language and environment options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::LanguageAndEnvironment;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("emitDecoratorMetadata", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .related(&["experimentalDecorators"])
        .describe("Emit design-time type metadata for decorated declarations."),
    OptionDefinition::new("experimentalDecorators", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.5")
        .related(&["emitDecoratorMetadata"])
        .describe("Enable the legacy, pre-standard decorator implementation."),
    OptionDefinition::new("jsx", OptionKind::String, C)
        .choices(&["preserve", "react", "react-native", "react-jsx", "react-jsxdev"])
        .since("1.6")
        .related(&["jsxFactory", "jsxFragmentFactory", "jsxImportSource"])
        .examples(&["\"react-jsx\"", "\"react-jsxdev\"", "\"preserve\""])
        .describe("How JSX constructs are emitted."),
    OptionDefinition::new("jsxFactory", OptionKind::String, C)
        .default_str("React.createElement")
        .since("2.2")
        .related(&["jsx", "jsxFragmentFactory", "jsxImportSource"])
        .examples(&["\"React.createElement\"", "\"h\"", "\"preact.h\""])
        .describe("Function called for JSX elements under the classic runtime."),
    OptionDefinition::new("jsxFragmentFactory", OptionKind::String, C)
        .default_str("React.Fragment")
        .since("4.0")
        .related(&["jsx", "jsxFactory", "jsxImportSource"])
        .examples(&["\"React.Fragment\"", "\"Fragment\"", "\"h.Fragment\""])
        .describe("Function used for JSX fragments under the classic runtime."),
    OptionDefinition::new("jsxImportSource", OptionKind::String, C)
        .default_str("react")
        .since("4.1")
        .related(&["jsx", "jsxFactory"])
        .examples(&["\"react\"", "\"preact\"", "\"solid\""])
        .describe("Module that provides jsx and jsxs factories for the react-jsx runtimes."),
    OptionDefinition::new("lib", OptionKind::Array, C)
        .default_list(&["es2022"])
        .since("2.0")
        .related(&["target", "noLib"])
        .examples(&["[\"es2022\"]", "[\"es2022\", \"dom\"]", "[\"es2022\", \"dom\", \"dom.iterable\"]"])
        .describe("Bundled library declaration files describing the runtime environment."),
    OptionDefinition::new("libReplacement", OptionKind::Boolean, C)
        .default_bool(true)
        .since("4.5")
        .related(&["lib"])
        .describe("Allow lib files to be substituted by packages in node_modules."),
    OptionDefinition::new("moduleDetection", OptionKind::String, C)
        .default_str("force")
        .choices(&["legacy", "auto", "force"])
        .since("4.7")
        .examples(&["\"force\"", "\"auto\"", "\"legacy\""])
        .describe("How a file is decided to be a script or a module."),
    OptionDefinition::new("noLib", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .related(&["lib"])
        .describe("Do not include any library declaration files."),
    OptionDefinition::new("reactNamespace", OptionKind::String, C)
        .default_str("React")
        .since("1.8")
        .deprecated()
        .related(&["jsxFactory"])
        .examples(&["\"React\"", "\"Preact\""])
        .describe("Object used for createElement calls. Replaced by jsxFactory."),
    OptionDefinition::new("target", OptionKind::String, C)
        .default_str("es2022")
        .choices(&["es3", "es5", "es6", "es2015", "es2016", "es2017", "es2018", "es2019", "es2020", "es2021", "es2022", "es2023", "es2024", "esnext"])
        .since("1.0")
        .related(&["lib", "useDefineForClassFields"])
        .examples(&["\"es2022\"", "\"es2020\"", "\"es5\""])
        .describe("Language version of the emitted JavaScript."),
    OptionDefinition::new("useDefineForClassFields", OptionKind::Boolean, C)
        .default_bool(true)
        .since("3.7")
        .related(&["target"])
        .describe("Emit class fields with standard define semantics."),
];
