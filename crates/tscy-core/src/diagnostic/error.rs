//! Generator error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

use crate::parser::ParseError;
use crate::registry::Category;

/// Errors that can occur while synthesizing a configuration.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // =========================================================================
    // Registry Errors
    // =========================================================================
    #[error("Option '{name}' is defined in both {first} and {second}")]
    #[diagnostic(
        code(tscy::registry::duplicate_option),
        help("Every option name must be unique across all category tables")
    )]
    DuplicateOption {
        name: String,
        first: Category,
        second: Category,
    },

    #[error("Option '{name}' has an invalid definition: {reason}")]
    #[diagnostic(code(tscy::registry::invalid_definition))]
    InvalidDefinition {
        name: String,
        reason: String,
    },

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Invalid value for --{option}")]
    #[diagnostic(
        code(tscy::input::invalid_flag),
        help("Run 'tscy --help-option {option}' to see the accepted values")
    )]
    InvalidFlag {
        option: String,
        #[source]
        source: ParseError,
    },

    #[error("Invalid value for --{option}: {reason}")]
    #[diagnostic(code(tscy::input::invalid_option_value))]
    InvalidOptionValue {
        option: String,
        reason: String,
    },

    #[error("Unknown compiler option: --{name}")]
    #[diagnostic(
        code(tscy::input::unknown_flag),
        help("Run 'tscy --help-options' to list every supported option")
    )]
    UnknownFlag {
        name: String,
    },

    #[error("Unknown preset '{name}'")]
    #[diagnostic(
        code(tscy::input::unknown_preset),
        help("Available presets: {available}")
    )]
    UnknownPreset {
        name: String,
        available: String,
    },

    #[error("Invalid value for '{option}': expected {expected}")]
    #[diagnostic(code(tscy::input::type_mismatch))]
    TypeMismatch {
        option: String,
        expected: String,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Configuration has {} error(s)", errors.len())]
    #[diagnostic(code(tscy::validate::invalid_config))]
    InvalidConfig {
        errors: Vec<String>,
    },

    // =========================================================================
    // Write Errors
    // =========================================================================
    #[error("File {} already exists", path.display())]
    #[diagnostic(
        code(tscy::write::file_exists),
        help("Use --force to overwrite")
    )]
    FileExists {
        path: PathBuf,
    },

    #[error("Failed to write '{}': {message}", path.display())]
    #[diagnostic(code(tscy::write::io_error))]
    IoError {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to serialize configuration: {message}")]
    #[diagnostic(code(tscy::write::serialize_failed))]
    SerializeFailed {
        message: String,
    },

    // =========================================================================
    // Interactive Errors
    // =========================================================================
    #[error("Operation cancelled")]
    #[diagnostic(code(tscy::prompt::cancelled))]
    Cancelled,

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(tscy::prompt::failed))]
    PromptFailed {
        message: String,
    },
}

impl GeneratorError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }
}
