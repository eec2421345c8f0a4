use serde_json::{json, Value};

use tscy_core::document::ConfigDocument;
use tscy_core::format::format_document;
use tscy_core::options::CompilerOptions;
use tscy_core::{build, validate_config, CliInput, Generator, GeneratorConfig, GeneratorError, Registry};

fn registry() -> Registry {
    Registry::new().unwrap()
}

fn document(options: Value) -> ConfigDocument {
    let Value::Object(map) = options else {
        panic!("compiler options must be an object");
    };
    ConfigDocument::new(CompilerOptions::from_json(&registry(), &map).unwrap())
}

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn target_and_strict_end_to_end() {
    let mut input = CliInput::new();
    input.set("target", "es2022").set("strict", "true");

    let mut doc = build(&registry(), &input).unwrap();
    let result = validate_config(&mut doc, &registry());
    assert!(result.is_valid, "{:?}", result.errors);

    let out = parse(&format_document(&doc, 2).unwrap());
    let options = &out["compilerOptions"];
    assert_eq!(options["target"], "es2022");
    assert_eq!(options["strict"], true);
    assert_eq!(options["module"], "NodeNext");
    assert_eq!(options["moduleResolution"], "NodeNext");
    assert_eq!(out["include"], json!(["**/*.ts", "**/*.tsx"]));
    assert_eq!(out["$schema"], "https://json.schemastore.org/tsconfig");
}

#[test]
fn formatting_is_idempotent() {
    let mut input = CliInput::new().with_preset("library");
    input.set("paths", r#"{"@/*": ["./src/*"]}"#);
    let mut doc = build(&registry(), &input).unwrap();
    validate_config(&mut doc, &registry());

    let first = format_document(&doc, 2).unwrap();

    let reparsed = parse(&first);
    let mut again = document(reparsed["compilerOptions"].clone());
    again.include = doc.include.clone();
    again.exclude = doc.exclude.clone();
    let second = format_document(&again, 2).unwrap();

    assert_eq!(first, second);
}

#[test]
fn identical_input_builds_identical_output() {
    let mut input = CliInput::new().with_preset("library");
    input
        .set("paths", r##"{"@/*": ["./src/*"], "#lib/*": ["./lib/*"]}"##)
        .set("lib", "es2022,dom");
    input.references = Some(r#"["../core", {"path": "../shared", "prepend": true}]"#.to_string());
    input.watch.watch_file = Some("useFsEvents".to_string());
    input.watch.fallback_polling = Some("dynamicPriority".to_string());
    input.watch.exclude_directories = Some("node_modules,dist".to_string());

    let registry = registry();
    let mut first = build(&registry, &input).unwrap();
    let mut second = build(&registry, &input).unwrap();
    let first_result = validate_config(&mut first, &registry);
    let second_result = validate_config(&mut second, &registry);

    assert_eq!(first_result, second_result);
    assert_eq!(
        format_document(&first, 2).unwrap(),
        format_document(&second, 2).unwrap()
    );
}

#[test]
fn composite_enables_declaration_with_single_warning() {
    let mut doc = document(json!({"composite": true, "skipLibCheck": true}));
    let result = validate_config(&mut doc, &registry());

    assert!(result.is_valid);
    assert!(doc.compiler_options.is_true("declaration"));

    let mentions: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.message.contains("composite"))
        .collect();
    assert_eq!(mentions.len(), 1);
}

#[test]
fn out_file_with_commonjs_reports_one_error() {
    let mut doc = document(json!({
        "outFile": "bundle.js",
        "module": "commonjs",
        "skipLibCheck": true
    }));
    let result = validate_config(&mut doc, &registry());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    let message = &result.errors[0].message;
    assert!(message.contains("outFile"));
    assert!(message.contains("module"));
}

#[test]
fn unknown_option_is_only_a_warning() {
    let mut doc = document(json!({"notARealOption": true, "skipLibCheck": true}));
    let result = validate_config(&mut doc, &registry());

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.message == "Unknown compiler option: notARealOption"));

    let out = parse(&format_document(&doc, 2).unwrap());
    assert_eq!(out["compilerOptions"]["notARealOption"], true);
}

#[test]
fn deprecated_option_names_replacements() {
    let mut doc = document(json!({"keyofStringsOnly": true, "skipLibCheck": true}));
    let result = validate_config(&mut doc, &registry());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.message.starts_with("Option 'keyofStringsOnly' is deprecated")));
}

#[test]
fn generator_writes_valid_documents() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("app/tsconfig.json");

    let config = GeneratorConfig {
        output: output.clone(),
        indent: 4,
        ..Default::default()
    };
    let generator = Generator::new(config).unwrap();

    let mut input = CliInput::new().with_preset("node");
    input.set("strict", "true");
    let (generation, report) = generator.generate(&input).unwrap();

    assert!(generation.validation.is_valid);
    assert_eq!(report.path, output);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.ends_with('\n'));
    assert!(text.contains("\n    \"compilerOptions\""));

    let written = parse(&text);
    assert_eq!(written["compilerOptions"]["outDir"], "dist");
    assert_eq!(written["exclude"], json!(["node_modules", "dist"]));

    // A second run without force must not clobber the file.
    assert!(matches!(
        generator.generate(&input),
        Err(GeneratorError::FileExists { .. })
    ));
}

#[test]
fn generator_refuses_invalid_documents() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("tsconfig.json");
    let generator = Generator::new(GeneratorConfig {
        output: output.clone(),
        ..Default::default()
    })
    .unwrap();

    let mut input = CliInput::new();
    input
        .set("allowImportingTsExtensions", "true")
        .set("noEmit", "true");
    let generation = generator.prepare(&input).unwrap();
    assert!(generation.validation.is_valid);

    let mut bad = generation.clone();
    bad.document.compiler_options = document(json!({
        "allowImportingTsExtensions": true,
        "skipLibCheck": true
    }))
    .compiler_options;
    bad.validation = validate_config(&mut bad.document, generator.registry());
    assert!(!bad.validation.is_valid);

    assert!(matches!(
        generator.write(&bad),
        Err(GeneratorError::InvalidConfig { .. })
    ));
    assert!(!output.exists());
}
