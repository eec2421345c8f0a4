//! Cross-option structural rules.
//!
//! The rules run in a fixed order so output is reproducible. Only the
//! `composite` rule mutates the options.

use crate::options::CompilerOptions;
use crate::registry::Registry;
use crate::value::OptionValue;

use super::{Issue, Report};

/// Strict-family flags that `strict: false` would otherwise imply off.
const STRICT_FAMILY: &[&str] = &[
    "alwaysStrict",
    "strictNullChecks",
    "strictBindCallApply",
    "strictBuiltinIteratorReturn",
    "strictFunctionTypes",
    "strictPropertyInitialization",
    "noImplicitAny",
    "noImplicitThis",
    "useUnknownInCatchVariables",
];

const OUT_FILE_MODULES: &[&str] = &["none", "system", "amd"];
const BUNDLER_MODULES: &[&str] = &["preserve", "esnext"];
const NODE_RESOLUTIONS: &[&str] = &["node16", "nodenext"];

fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.iter().any(|a| a.eq_ignore_ascii_case(value))
}

/// Applies every structural rule to `options`.
pub(super) fn check_cross_option_rules(
    options: &mut CompilerOptions,
    registry: &Registry,
    report: &mut Report,
) {
    check_out_file(options, report);
    check_ts_extension_imports(options, report);
    check_composite(options, registry, report);
    check_strict_family(options, report);
    check_bundler_resolution(options, report);
    check_jsx(options, report);
    check_es5_lib(options, report);
    check_incremental(options, report);
    check_verbatim_module_syntax(options, report);
    check_node_resolution(options, report);
    check_skip_lib_check(options, report);
    check_side_effect_imports(options, report);
}

fn check_out_file(options: &CompilerOptions, report: &mut Report) {
    if !options.is_set("outFile") {
        return;
    }
    if let Some(module) = options.get_str("module") {
        if !is_one_of(module, OUT_FILE_MODULES) {
            report.error_once(Issue::for_option(
                "outFile",
                "outFile can only be used with module: none, system, or amd",
            ));
        }
    }
}

fn check_ts_extension_imports(options: &CompilerOptions, report: &mut Report) {
    if options.is_true("allowImportingTsExtensions")
        && !options.is_true("noEmit")
        && !options.is_true("emitDeclarationOnly")
    {
        report.error_once(Issue::for_option(
            "allowImportingTsExtensions",
            "allowImportingTsExtensions requires noEmit or emitDeclarationOnly",
        ));
    }
}

fn check_composite(options: &mut CompilerOptions, registry: &Registry, report: &mut Report) {
    if !options.is_true("composite") {
        return;
    }

    if !options.is_true("declaration") {
        if let Some(declaration) = registry.get("declaration") {
            options.insert(declaration, OptionValue::Bool(true));
        }
        report.warn(Issue::for_option(
            "declaration",
            "Enabled declaration because composite is true",
        ));
    }

    if !options.is_true("incremental") {
        report.warn(Issue::for_option(
            "incremental",
            "Consider enabling incremental to speed up project builds",
        ));
    }
}

fn check_strict_family(options: &CompilerOptions, report: &mut Report) {
    if !options.is_false("strict") {
        return;
    }

    let enabled: Vec<&str> = STRICT_FAMILY
        .iter()
        .copied()
        .filter(|flag| options.is_true(flag))
        .collect();

    if !enabled.is_empty() {
        report.warn(Issue::for_option(
            "strict",
            format!(
                "strict is false but these strict options are explicitly enabled: {}",
                enabled.join(", ")
            ),
        ));
    }
}

fn check_bundler_resolution(options: &CompilerOptions, report: &mut Report) {
    if !options.str_eq("moduleResolution", "bundler") {
        return;
    }
    if let Some(module) = options.get_str("module") {
        if !is_one_of(module, BUNDLER_MODULES) {
            report.warn(Issue::for_option(
                "moduleResolution",
                "moduleResolution: bundler works best with module: preserve or esnext",
            ));
        }
    }
}

fn check_jsx(options: &CompilerOptions, report: &mut Report) {
    let Some(jsx) = options.get_str("jsx") else {
        return;
    };
    if !jsx.eq_ignore_ascii_case("preserve")
        && !options.is_set("jsxFactory")
        && !options.is_set("jsxImportSource")
    {
        report.warn(Issue::for_option(
            "jsx",
            "JSX is configured but no jsxFactory or jsxImportSource is set",
        ));
    }
}

fn check_es5_lib(options: &CompilerOptions, report: &mut Report) {
    if !options.str_eq("target", "es5") {
        return;
    }
    let modern_lib = options
        .get_list("lib")
        .is_some_and(|libs| libs.iter().any(|lib| lib.to_ascii_lowercase().starts_with("es2")));
    if modern_lib {
        report.warn(Issue::for_option(
            "lib",
            "Using ES2015+ lib with ES5 target may cause runtime issues",
        ));
    }
}

fn check_incremental(options: &CompilerOptions, report: &mut Report) {
    if options.is_true("incremental")
        && !options.is_true("composite")
        && !options.is_set("tsBuildInfoFile")
    {
        report.warn(Issue::for_option(
            "tsBuildInfoFile",
            "Consider setting tsBuildInfoFile when using incremental without composite",
        ));
    }
}

fn check_verbatim_module_syntax(options: &CompilerOptions, report: &mut Report) {
    if !options.is_true("verbatimModuleSyntax") {
        return;
    }

    if options.is_false("allowSyntheticDefaultImports") {
        report.warn(Issue::for_option(
            "allowSyntheticDefaultImports",
            "verbatimModuleSyntax may conflict with allowSyntheticDefaultImports: false",
        ));
    }

    if let Some(mode) = options.get_str("importsNotUsedAsValues") {
        if !mode.eq_ignore_ascii_case("remove") {
            report.warn(Issue::for_option(
                "importsNotUsedAsValues",
                "verbatimModuleSyntax replaces importsNotUsedAsValues",
            ));
        }
    }

    if options.is_true("preserveValueImports") {
        report.warn(Issue::for_option(
            "preserveValueImports",
            "verbatimModuleSyntax replaces preserveValueImports",
        ));
    }
}

fn check_node_resolution(options: &CompilerOptions, report: &mut Report) {
    let node_resolution = options
        .get_str("moduleResolution")
        .is_some_and(|resolution| is_one_of(resolution, NODE_RESOLUTIONS));
    if !node_resolution {
        return;
    }

    if !options.is_true("resolvePackageJsonExports") {
        report.warn(Issue::for_option(
            "resolvePackageJsonExports",
            "resolvePackageJsonExports should be true with Node.js module resolution",
        ));
    }
    if !options.is_true("resolvePackageJsonImports") {
        report.warn(Issue::for_option(
            "resolvePackageJsonImports",
            "resolvePackageJsonImports should be true with Node.js module resolution",
        ));
    }
}

fn check_skip_lib_check(options: &CompilerOptions, report: &mut Report) {
    if !options.is_true("skipLibCheck") {
        report.warn(Issue::for_option(
            "skipLibCheck",
            "Consider enabling skipLibCheck for faster compilation",
        ));
    }
}

fn check_side_effect_imports(options: &CompilerOptions, report: &mut Report) {
    if options.is_false("noUncheckedSideEffectImports") {
        report.warn(Issue::for_option(
            "noUncheckedSideEffectImports",
            "Disabling noUncheckedSideEffectImports may hide import typos",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: serde_json::Value) -> (CompilerOptions, Report) {
        let registry = Registry::new().unwrap();
        let serde_json::Value::Object(map) = value else {
            unreachable!()
        };
        let mut options = CompilerOptions::from_json(&registry, &map).unwrap();
        let mut report = Report::default();
        check_cross_option_rules(&mut options, &registry, &mut report);
        (options, report)
    }

    fn warnings(report: &Report) -> Vec<&str> {
        report.warnings.iter().map(|w| w.message.as_str()).collect()
    }

    #[test]
    fn test_out_file_with_commonjs_is_an_error() {
        let (_, report) = run(json!({"outFile": "bundle.js", "module": "commonjs", "skipLibCheck": true}));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("outFile"));
        assert!(report.errors[0].message.contains("module"));
    }

    #[test]
    fn test_out_file_with_amd_is_fine() {
        let (_, report) = run(json!({"outFile": "bundle.js", "module": "AMD", "skipLibCheck": true}));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_composite_enables_declaration() {
        let (options, report) = run(json!({"composite": true, "skipLibCheck": true}));
        assert!(options.is_true("declaration"));
        let composite: Vec<_> = warnings(&report)
            .into_iter()
            .filter(|w| w.contains("composite"))
            .collect();
        assert_eq!(composite, vec!["Enabled declaration because composite is true"]);
    }

    #[test]
    fn test_composite_with_declaration_is_untouched() {
        let (_, report) = run(json!({
            "composite": true,
            "declaration": true,
            "incremental": true,
            "skipLibCheck": true
        }));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_strict_false_lists_enabled_family_flags() {
        let (_, report) = run(json!({
            "strict": false,
            "noImplicitAny": true,
            "strictNullChecks": true,
            "noImplicitThis": false,
            "skipLibCheck": true
        }));
        assert_eq!(
            warnings(&report),
            vec!["strict is false but these strict options are explicitly enabled: strictNullChecks, noImplicitAny"]
        );
    }

    #[test]
    fn test_bundler_resolution_with_commonjs() {
        let (_, report) = run(json!({
            "moduleResolution": "bundler",
            "module": "commonjs",
            "skipLibCheck": true
        }));
        assert_eq!(
            warnings(&report),
            vec!["moduleResolution: bundler works best with module: preserve or esnext"]
        );

        let (_, report) = run(json!({
            "moduleResolution": "Bundler",
            "module": "ESNext",
            "skipLibCheck": true
        }));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_jsx_without_factory() {
        let (_, report) = run(json!({"jsx": "react", "skipLibCheck": true}));
        assert_eq!(report.warnings.len(), 1);

        let (_, report) = run(json!({"jsx": "preserve", "skipLibCheck": true}));
        assert!(report.warnings.is_empty());

        let (_, report) = run(json!({"jsx": "react-jsx", "jsxImportSource": "preact", "skipLibCheck": true}));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_es5_target_with_modern_lib() {
        let (_, report) = run(json!({"target": "es5", "lib": ["dom", "es2015"], "skipLibCheck": true}));
        assert_eq!(
            warnings(&report),
            vec!["Using ES2015+ lib with ES5 target may cause runtime issues"]
        );
    }

    #[test]
    fn test_incremental_without_build_info_file() {
        let (_, report) = run(json!({"incremental": true, "skipLibCheck": true}));
        assert_eq!(report.warnings.len(), 1);

        let (_, report) = run(json!({
            "incremental": true,
            "tsBuildInfoFile": ".tsbuildinfo",
            "skipLibCheck": true
        }));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_verbatim_module_syntax_conflicts() {
        let (_, report) = run(json!({
            "verbatimModuleSyntax": true,
            "allowSyntheticDefaultImports": false,
            "importsNotUsedAsValues": "error",
            "preserveValueImports": true,
            "skipLibCheck": true
        }));
        assert_eq!(report.warnings.len(), 3);

        let (_, report) = run(json!({
            "verbatimModuleSyntax": true,
            "importsNotUsedAsValues": "remove",
            "skipLibCheck": true
        }));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_node_resolution_wants_package_json_fields() {
        let (_, report) = run(json!({"moduleResolution": "node16", "skipLibCheck": true}));
        assert_eq!(report.warnings.len(), 2);

        let (_, report) = run(json!({
            "moduleResolution": "NodeNext",
            "resolvePackageJsonExports": true,
            "resolvePackageJsonImports": true,
            "skipLibCheck": true
        }));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_skip_lib_check_suggestion() {
        let (_, report) = run(json!({}));
        assert_eq!(
            warnings(&report),
            vec!["Consider enabling skipLibCheck for faster compilation"]
        );
    }

    #[test]
    fn test_side_effect_imports_disabled() {
        let (_, report) = run(json!({"noUncheckedSideEffectImports": false, "skipLibCheck": true}));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let (_, report) = run(json!({
            "noUncheckedSideEffectImports": false,
            "jsx": "react",
            "composite": true,
            "declaration": true,
            "incremental": true
        }));
        assert_eq!(
            warnings(&report),
            vec![
                "JSX is configured but no jsxFactory or jsxImportSource is set",
                "Consider enabling skipLibCheck for faster compilation",
                "Disabling noUncheckedSideEffectImports may hide import typos",
            ]
        );
    }
}
