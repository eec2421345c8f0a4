//! Completeness options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::Completeness;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("skipDefaultLibCheck", OptionKind::Boolean, C)
        .default_bool(false)
        .since("1.6")
        .deprecated()
        .related(&["skipLibCheck"])
        .describe("Skip type checking of default library files. Replaced by skipLibCheck."),
    OptionDefinition::new("skipLibCheck", OptionKind::Boolean, C)
        .default_bool(true)
        .since("2.0")
        .describe("Skip type checking of all declaration files."),
];
