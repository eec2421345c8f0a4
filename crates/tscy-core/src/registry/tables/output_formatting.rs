//! Output formatting options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::OutputFormatting;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("noErrorTruncation", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.0")
        .describe("Print error messages without truncating long types."),
    OptionDefinition::new("preserveWatchOutput", OptionKind::Boolean, C)
        .default_bool(false)
        .since("2.8")
        .describe("Keep previous console output between rebuilds in watch mode."),
    OptionDefinition::new("pretty", OptionKind::Boolean, C)
        .default_bool(true)
        .since("1.8")
        .describe("Colorize and add context to compiler messages."),
];
