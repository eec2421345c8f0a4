//! The generated configuration document.

use serde::{Deserialize, Serialize};

use crate::options::CompilerOptions;

/// JSON schema URL written as `$schema`.
pub const DEFAULT_SCHEMA_URL: &str = "https://json.schemastore.org/tsconfig";

/// Include patterns used when none are given.
pub const DEFAULT_INCLUDE: &[&str] = &["**/*.ts", "**/*.tsx"];

/// Extra include patterns added when `allowJs` is on.
pub const JS_INCLUDE: &[&str] = &["**/*.js", "**/*.jsx"];

/// Exclude patterns used when none are given.
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules"];

/// A complete `tsconfig.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    pub schema: String,
    pub extends: Option<Extends>,
    pub compiler_options: CompilerOptions,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
    pub references: Option<Vec<ProjectReference>>,
    pub watch_options: Option<WatchOptions>,
    pub type_acquisition: Option<TypeAcquisition>,
}

impl ConfigDocument {
    pub fn new(compiler_options: CompilerOptions) -> Self {
        Self {
            schema: DEFAULT_SCHEMA_URL.to_string(),
            extends: None,
            compiler_options,
            include: None,
            exclude: None,
            files: None,
            references: None,
            watch_options: None,
            type_acquisition: None,
        }
    }
}

/// The `extends` field: one base config or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extends {
    Single(String),
    Many(Vec<String>),
}

/// An entry of `references`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReference {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub circular: Option<bool>,
}

impl ProjectReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            prepend: None,
            circular: None,
        }
    }
}

/// Permitted values of `watchOptions.watchFile`.
pub const WATCH_FILE_KINDS: &[&str] = &[
    "fixedpollinginterval",
    "prioritypollinginterval",
    "dynamicprioritypolling",
    "fixedchunksizepolling",
    "usefsevents",
    "usefseventsonparentdirectory",
];

/// Permitted values of `watchOptions.watchDirectory`.
pub const WATCH_DIRECTORY_KINDS: &[&str] = &[
    "usefsevents",
    "fixedpollinginterval",
    "dynamicprioritypolling",
    "fixedchunksizepolling",
];

/// Permitted values of `watchOptions.fallbackPolling`.
pub const FALLBACK_POLLING_KINDS: &[&str] = &[
    "fixedinterval",
    "priorityinterval",
    "dynamicpriority",
    "fixedchunksize",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_polling: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous_watch_directory: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_directories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_files: Option<Vec<String>>,
}

impl WatchOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAcquisition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_filename_based_type_acquisition: Option<bool>,
}

impl TypeAcquisition {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
