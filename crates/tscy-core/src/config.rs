//! Generator configuration.

use std::path::PathBuf;

use crate::write::WriteOptions;

/// Settings for one generator run, independent of the options being generated.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Where the configuration file is written.
    pub output: PathBuf,

    /// Overwrite an existing file.
    pub force: bool,

    /// Spaces per indentation level (default: 2).
    pub indent: usize,

    /// Print a summary of the generated configuration.
    pub verbose: bool,
}

impl GeneratorConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            force: self.force,
            indent: self.indent,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./tsconfig.json"),
            force: false,
            indent: 2,
            verbose: false,
        }
    }
}
