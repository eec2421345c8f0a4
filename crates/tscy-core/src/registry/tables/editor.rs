//! Editor support options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::EditorSupport;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("disableSizeLimit", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.0")
        .describe("Remove the memory cap applied to very large JavaScript projects."),
    OptionDefinition::new("plugins", OptionKind::Array, C)
        .since("2.2")
        .examples(&["[\"typescript-styled-plugin\"]", "typescript-styled-plugin,ts-sql-plugin"])
        .describe("Language service plugins to load in the editor."),
];
