//! Document serialization.
//!
//! Keys are written in a fixed order so the same document always formats to
//! the same bytes.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::diagnostic::GeneratorError;
use crate::document::ConfigDocument;
use crate::options::CompilerOptions;

/// Compiler options that lead `compilerOptions`, in this order.
const PREFERRED_ORDER: &[&str] = &[
    // Core
    "target",
    "module",
    "moduleResolution",
    "lib",
    // Strictness
    "strict",
    "noImplicitAny",
    "strictNullChecks",
    "strictFunctionTypes",
    "strictBindCallApply",
    "strictPropertyInitialization",
    "noImplicitReturns",
    "noImplicitThis",
    "noImplicitOverride",
    "exactOptionalPropertyTypes",
    "noUncheckedIndexedAccess",
    // Module resolution
    "baseUrl",
    "paths",
    "rootDirs",
    "typeRoots",
    "types",
    "resolveJsonModule",
    "resolvePackageJsonExports",
    "resolvePackageJsonImports",
    // Emit
    "outDir",
    "outFile",
    "rootDir",
    "declaration",
    "declarationDir",
    "declarationMap",
    "sourceMap",
    "inlineSourceMap",
    "removeComments",
    "noEmit",
    "emitDeclarationOnly",
    // Interop
    "esModuleInterop",
    "allowSyntheticDefaultImports",
    "isolatedModules",
    "verbatimModuleSyntax",
    "forceConsistentCasingInFileNames",
    // Advanced
    "skipLibCheck",
    "allowJs",
    "checkJs",
];

/// Serializes `document` as pretty JSON indented by `indent` spaces, with a
/// trailing newline.
pub fn format_document(document: &ConfigDocument, indent: usize) -> Result<String, GeneratorError> {
    let ordered = ordered_document(document)?;

    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    ordered.serialize(&mut serializer).map_err(serialize_failed)?;

    let mut out = String::from_utf8(buf).map_err(|err| GeneratorError::SerializeFailed {
        message: err.to_string(),
    })?;
    out.push('\n');
    Ok(out)
}

fn ordered_document(document: &ConfigDocument) -> Result<Value, GeneratorError> {
    let mut root = Map::new();
    root.insert("$schema".to_string(), Value::String(document.schema.clone()));
    if let Some(extends) = &document.extends {
        root.insert("extends".to_string(), to_value(extends)?);
    }
    root.insert(
        "compilerOptions".to_string(),
        Value::Object(ordered_compiler_options(&document.compiler_options)),
    );
    if let Some(include) = &document.include {
        root.insert("include".to_string(), to_value(include)?);
    }
    if let Some(exclude) = &document.exclude {
        root.insert("exclude".to_string(), to_value(exclude)?);
    }
    if let Some(files) = &document.files {
        root.insert("files".to_string(), to_value(files)?);
    }
    if let Some(references) = &document.references {
        root.insert("references".to_string(), to_value(references)?);
    }
    if let Some(watch) = &document.watch_options {
        root.insert("watchOptions".to_string(), to_value(watch)?);
    }
    if let Some(acquisition) = &document.type_acquisition {
        root.insert("typeAcquisition".to_string(), to_value(acquisition)?);
    }
    Ok(Value::Object(root))
}

/// Preferred keys first, then the rest of the known options, then unknown
/// options, each group in insertion order.
fn ordered_compiler_options(options: &CompilerOptions) -> Map<String, Value> {
    let mut ordered = Map::new();

    for name in PREFERRED_ORDER {
        if let Some(value) = options.get(name) {
            ordered.insert(name.to_string(), value.to_json());
        }
    }
    for (name, value) in options.known() {
        if !ordered.contains_key(name) {
            ordered.insert(name.to_string(), value.to_json());
        }
    }
    for (name, value) in options.extra() {
        if !ordered.contains_key(name) {
            ordered.insert(name.to_string(), value.clone());
        }
    }

    ordered
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, GeneratorError> {
    serde_json::to_value(value).map_err(serialize_failed)
}

fn serialize_failed(err: serde_json::Error) -> GeneratorError {
    GeneratorError::SerializeFailed {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Extends, ProjectReference, WatchOptions};
    use crate::registry::Registry;
    use serde_json::json;

    fn options(value: Value) -> CompilerOptions {
        let registry = Registry::new().unwrap();
        let Value::Object(map) = value else {
            unreachable!()
        };
        CompilerOptions::from_json(&registry, &map).unwrap()
    }

    #[test]
    fn test_top_level_key_order() {
        let mut doc = ConfigDocument::new(options(json!({"strict": true})));
        doc.type_acquisition = None;
        doc.watch_options = Some(WatchOptions {
            watch_file: Some("useFsEvents".to_string()),
            ..Default::default()
        });
        doc.references = Some(vec![ProjectReference::new("../core")]);
        doc.include = Some(vec!["src".to_string()]);
        doc.extends = Some(Extends::Single("./base.json".to_string()));

        let out = format_document(&doc, 2).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let keys: Vec<_> = parsed.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "$schema",
                "extends",
                "compilerOptions",
                "include",
                "references",
                "watchOptions"
            ]
        );
    }

    #[test]
    fn test_compiler_option_order() {
        let mut opts = options(json!({
            "noUnusedLocals": true,
            "skipLibCheck": true,
            "strict": true,
            "target": "es2022",
        }));
        opts.insert_unknown("futureFlag", json!(1));

        let ordered = ordered_compiler_options(&opts);
        let keys: Vec<_> = ordered.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["target", "strict", "skipLibCheck", "noUnusedLocals", "futureFlag"]
        );
    }

    #[test]
    fn test_indent_and_trailing_newline() {
        let doc = ConfigDocument::new(options(json!({"strict": true})));
        let out = format_document(&doc, 4).unwrap();
        assert!(out.ends_with("}\n"));
        assert!(out.contains("\n    \"$schema\""));
        assert!(out.contains("\n        \"strict\": true"));
    }

    #[test]
    fn test_integral_numbers_have_no_fraction() {
        let doc = ConfigDocument::new(options(json!({"maxNodeModuleJsDepth": 2})));
        let out = format_document(&doc, 2).unwrap();
        assert!(out.contains("\"maxNodeModuleJsDepth\": 2\n"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let doc = ConfigDocument::new(options(json!({"target": "es2020", "lib": ["dom"]})));
        assert_eq!(format_document(&doc, 2).unwrap(), format_document(&doc, 2).unwrap());
    }
}
