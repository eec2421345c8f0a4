//! # tscy
//!
//! This crate synthesizes `tsconfig.json` files. It knows every TypeScript
//! compiler option (type, default, permitted values, deprecation), turns raw
//! command-line strings into typed values, and checks the assembled options
//! for inconsistent combinations before anything is written.
//!
//! ## Architecture
//!
//! ```text
//! Flags / Wizard answers
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Builder    │  Registry + Parser + Presets
//! │ (raw → doc)  │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Constraints & cross-option rules
//! │    (doc)     │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Write     │  Ordered JSON on disk
//! │ (doc → file) │
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tscy_core::{CliInput, Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::default())?;
//!
//! let mut input = CliInput::new();
//! input.set("target", "es2022").set("strict", "true");
//!
//! let generation = generator.prepare(&input)?;
//! for warning in &generation.validation.warnings {
//!     eprintln!("{}", warning);
//! }
//! generator.write(&generation)?;
//! ```

pub mod builder;
pub mod config;
pub mod diagnostic;
pub mod document;
pub mod format;
pub mod options;
pub mod parser;
pub mod preset;
pub mod registry;
pub mod validate;
pub mod value;
pub mod wizard;
pub mod write;

use tracing::debug;

pub use builder::{build, CliInput};
pub use config::GeneratorConfig;
pub use diagnostic::GeneratorError;
pub use document::ConfigDocument;
pub use registry::Registry;
pub use validate::{validate_config, ValidationResult};
pub use write::WriteReport;

/// Orchestrates build, validation and write for one configuration.
pub struct Generator {
    registry: Registry,
    config: GeneratorConfig,
}

/// A built and validated document that has not been written yet.
#[derive(Debug, Clone)]
pub struct Generation {
    pub document: ConfigDocument,
    pub validation: ValidationResult,
}

impl Generator {
    /// Creates a generator over the built-in option registry.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Ok(Self::with_registry(Registry::new()?, config))
    }

    pub fn with_registry(registry: Registry, config: GeneratorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds and validates a document without touching the filesystem.
    ///
    /// Parse failures and unknown flags abort with an error. Validation
    /// problems are returned in [`Generation::validation`].
    pub fn prepare(&self, input: &CliInput) -> Result<Generation, GeneratorError> {
        let mut document = build(&self.registry, input)?;
        let validation = validate_config(&mut document, &self.registry);
        debug!(valid = validation.is_valid, "generation prepared");
        Ok(Generation {
            document,
            validation,
        })
    }

    /// Writes a prepared document to the configured output path.
    ///
    /// Refuses to write a document that failed validation.
    pub fn write(&self, generation: &Generation) -> Result<WriteReport, GeneratorError> {
        if !generation.validation.is_valid {
            return Err(GeneratorError::InvalidConfig {
                errors: generation
                    .validation
                    .errors
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            });
        }
        write::write_config(
            &generation.document,
            &self.config.output,
            self.config.write_options(),
        )
    }

    /// Runs the whole pipeline: build, validate and write.
    pub fn generate(&self, input: &CliInput) -> Result<(Generation, WriteReport), GeneratorError> {
        let generation = self.prepare(input)?;
        let report = self.write(&generation)?;
        Ok((generation, report))
    }
}
