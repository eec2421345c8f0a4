//! Named option bundles.
//!
//! A preset is a list of raw flag values. The builder parses them exactly as
//! if they had been typed on the command line, so presets go through the same
//! type checks as user input.

use crate::diagnostic::GeneratorError;

/// A named bundle of option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    /// `(option, raw value)` pairs in display order.
    pub values: &'static [(&'static str, &'static str)],
}

impl Preset {
    /// Raw value this preset assigns to `option`.
    pub fn value(&self, option: &str) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(name, _)| *name == option)
            .map(|(_, raw)| *raw)
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "minimal",
        description: "Strict type checking with fast library checks and nothing else",
        values: &[("strict", "true"), ("skipLibCheck", "true")],
    },
    Preset {
        name: "node",
        description: "A Node.js application emitting ES2022 JavaScript to dist/",
        values: &[
            ("module", "NodeNext"),
            ("moduleResolution", "NodeNext"),
            ("target", "es2022"),
            ("lib", "es2022"),
            ("outDir", "dist"),
            ("sourceMap", "true"),
        ],
    },
    Preset {
        name: "library",
        description: "A published package shipping declarations and source maps",
        values: &[
            ("declaration", "true"),
            ("declarationMap", "true"),
            ("sourceMap", "true"),
            ("outDir", "dist"),
        ],
    },
    Preset {
        name: "react",
        description: "A bundled React application type-checked by tsc",
        values: &[
            ("jsx", "react-jsx"),
            ("lib", "es2022,dom,dom.iterable"),
            ("module", "esnext"),
            ("moduleResolution", "bundler"),
            ("noEmit", "true"),
        ],
    },
    Preset {
        name: "monorepo",
        description: "A referenced project inside a multi-package build",
        values: &[
            ("composite", "true"),
            ("declaration", "true"),
            ("declarationMap", "true"),
            ("incremental", "true"),
        ],
    },
];

/// Looks up a preset by name.
pub fn find(name: &str) -> Result<&'static Preset, GeneratorError> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| GeneratorError::UnknownPreset {
            name: name.to_string(),
            available: names().join(", "),
        })
}

pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.name).collect()
}
