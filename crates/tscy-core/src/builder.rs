//! Config document assembly.
//!
//! The builder turns raw command-line input into a [`ConfigDocument`]. Every
//! registry option resolves, in order of precedence, to the explicit flag
//! value, the preset value, or the declared default. Options with none of
//! these are left out of the document.

use indexmap::IndexMap;
use tracing::debug;

use crate::diagnostic::GeneratorError;
use crate::document::{
    ConfigDocument, Extends, ProjectReference, TypeAcquisition, WatchOptions, DEFAULT_EXCLUDE,
    DEFAULT_INCLUDE, FALLBACK_POLLING_KINDS, JS_INCLUDE, WATCH_DIRECTORY_KINDS, WATCH_FILE_KINDS,
};
use crate::options::CompilerOptions;
use crate::parser::{parse_bool, parse_list, parse_value, ParseError};
use crate::preset;
use crate::registry::{OptionDefinition, Registry};
use crate::validate::validate_value;
use crate::value::OptionValue;

/// Raw `watchOptions` flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchInput {
    pub watch_file: Option<String>,
    pub watch_directory: Option<String>,
    pub fallback_polling: Option<String>,
    pub synchronous_watch_directory: Option<String>,
    pub exclude_directories: Option<String>,
    pub exclude_files: Option<String>,
}

/// Raw `typeAcquisition` flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeAcquisitionInput {
    pub enable: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub disable_filename_based_type_acquisition: Option<String>,
}

/// Everything the user supplied, still as raw strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliInput {
    /// Compiler option flags, keyed by option name.
    pub values: IndexMap<String, String>,
    pub preset: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub files: Option<String>,
    pub extends: Option<String>,
    pub references: Option<String>,
    pub watch: WatchInput,
    pub type_acquisition: TypeAcquisitionInput,
}

impl CliInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a compiler option flag, replacing any earlier value.
    pub fn set(&mut self, option: impl Into<String>, raw: impl Into<String>) -> &mut Self {
        self.values.insert(option.into(), raw.into());
        self
    }

    pub fn with_preset(mut self, name: impl Into<String>) -> Self {
        self.preset = Some(name.into());
        self
    }
}

/// Builds a complete document from `input`.
pub fn build(registry: &Registry, input: &CliInput) -> Result<ConfigDocument, GeneratorError> {
    if let Some(name) = input.values.keys().find(|name| !registry.contains(name)) {
        return Err(GeneratorError::UnknownFlag { name: name.clone() });
    }

    let preset = input.preset.as_deref().map(preset::find).transpose()?;
    if let Some(preset) = preset {
        debug!(preset = preset.name, "seeding options from preset");
    }

    let mut options = CompilerOptions::new();
    let mut explicit: Vec<&'static OptionDefinition> = Vec::new();

    for definition in registry.iter() {
        if let Some(raw) = input.values.get(definition.name) {
            options.insert(definition, parse_flag(raw, definition)?);
            explicit.push(definition);
        } else if let Some(raw) = preset.and_then(|p| p.value(definition.name)) {
            options.insert(definition, parse_flag(raw, definition)?);
        } else if let Some(default) = &definition.default {
            options.insert(definition, default.to_value());
        }
    }

    for definition in &explicit {
        if let Some(value) = options.get(definition.name) {
            validate_value(value, definition, &options).map_err(|reason| {
                GeneratorError::InvalidOptionValue {
                    option: definition.name.to_string(),
                    reason,
                }
            })?;
        }
    }

    debug!(
        options = options.len(),
        explicit = explicit.len(),
        "compiler options assembled"
    );

    let mut document = ConfigDocument::new(CompilerOptions::default());
    document.include = Some(resolve_include(input, &options));
    document.exclude = Some(resolve_exclude(input, &options));
    document.files = input.files.as_deref().map(parse_list);
    document.extends = input.extends.as_deref().map(parse_extends);
    document.references = input
        .references
        .as_deref()
        .map(parse_references)
        .transpose()?;

    let watch = build_watch_options(&input.watch)?;
    document.watch_options = (!watch.is_empty()).then_some(watch);

    let acquisition = build_type_acquisition(&input.type_acquisition)?;
    document.type_acquisition = (!acquisition.is_empty()).then_some(acquisition);

    document.compiler_options = options;
    Ok(document)
}

fn parse_flag(raw: &str, definition: &OptionDefinition) -> Result<OptionValue, GeneratorError> {
    parse_value(raw, definition).map_err(|source| GeneratorError::InvalidFlag {
        option: definition.name.to_string(),
        source,
    })
}

fn resolve_include(input: &CliInput, options: &CompilerOptions) -> Vec<String> {
    if let Some(raw) = &input.include {
        return parse_list(raw);
    }

    let mut include: Vec<String> = DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect();
    if options.is_true("allowJs") {
        include.extend(JS_INCLUDE.iter().map(|p| p.to_string()));
    }
    include
}

fn resolve_exclude(input: &CliInput, options: &CompilerOptions) -> Vec<String> {
    if let Some(raw) = &input.exclude {
        return parse_list(raw);
    }

    let mut exclude: Vec<String> = DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect();
    if let Some(out_dir) = options.get_str("outDir") {
        exclude.push(out_dir.to_string());
    }
    exclude
}

/// A JSON string array extends several bases; anything else is one path.
fn parse_extends(raw: &str) -> Extends {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(bases) => Extends::Many(bases),
        Err(_) => Extends::Single(raw.to_string()),
    }
}

/// Parses `references` from a JSON array of paths or reference objects, or
/// from a comma-separated list of paths.
fn parse_references(raw: &str) -> Result<Vec<ProjectReference>, GeneratorError> {
    let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(raw) else {
        return Ok(parse_list(raw).into_iter().map(ProjectReference::new).collect());
    };

    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(path) => Ok(ProjectReference::new(path)),
            other => serde_json::from_value::<ProjectReference>(other).map_err(|err| {
                GeneratorError::InvalidOptionValue {
                    option: "references".to_string(),
                    reason: err.to_string(),
                }
            }),
        })
        .collect()
}

fn parse_kind(
    flag: &str,
    raw: Option<&str>,
    allowed: &[&str],
) -> Result<Option<String>, GeneratorError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if allowed.iter().any(|kind| kind.eq_ignore_ascii_case(raw)) {
        Ok(Some(raw.to_string()))
    } else {
        Err(GeneratorError::InvalidFlag {
            option: flag.to_string(),
            source: ParseError::InvalidChoice {
                value: raw.to_string(),
                choices: allowed.iter().map(|kind| kind.to_string()).collect(),
            },
        })
    }
}

fn parse_flag_bool(flag: &str, raw: Option<&str>) -> Result<Option<bool>, GeneratorError> {
    raw.map(|raw| {
        parse_bool(raw)
            .map(|value| value.as_bool().unwrap_or_default())
            .map_err(|source| GeneratorError::InvalidFlag {
                option: flag.to_string(),
                source,
            })
    })
    .transpose()
}

fn build_watch_options(input: &WatchInput) -> Result<WatchOptions, GeneratorError> {
    Ok(WatchOptions {
        watch_file: parse_kind("watch-file", input.watch_file.as_deref(), WATCH_FILE_KINDS)?,
        watch_directory: parse_kind(
            "watch-directory",
            input.watch_directory.as_deref(),
            WATCH_DIRECTORY_KINDS,
        )?,
        fallback_polling: parse_kind(
            "fallback-polling",
            input.fallback_polling.as_deref(),
            FALLBACK_POLLING_KINDS,
        )?,
        synchronous_watch_directory: parse_flag_bool(
            "synchronous-watch-directory",
            input.synchronous_watch_directory.as_deref(),
        )?,
        exclude_directories: input.exclude_directories.as_deref().map(parse_list),
        exclude_files: input.exclude_files.as_deref().map(parse_list),
    })
}

fn build_type_acquisition(
    input: &TypeAcquisitionInput,
) -> Result<TypeAcquisition, GeneratorError> {
    Ok(TypeAcquisition {
        enable: parse_flag_bool("type-acquisition-enable", input.enable.as_deref())?,
        include: input.include.as_deref().map(parse_list),
        exclude: input.exclude.as_deref().map(parse_list),
        disable_filename_based_type_acquisition: parse_flag_bool(
            "disable-filename-based-type-acquisition",
            input.disable_filename_based_type_acquisition.as_deref(),
        )?,
    })
}
