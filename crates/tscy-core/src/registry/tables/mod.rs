//! Built-in category tables.
//!
//! Table order here is the registry's merge order and therefore the order in
//! which defaults are seeded into a generated config.

mod backwards_compat;
mod completeness;
mod diagnostics;
mod editor;
mod emit;
mod interop;
mod javascript;
mod language;
mod modules;
mod output_formatting;
mod projects;
mod type_checking;

use super::OptionDefinition;

pub(super) const ALL: &[&[OptionDefinition]] = &[
    type_checking::OPTIONS,
    modules::OPTIONS,
    emit::OPTIONS,
    javascript::OPTIONS,
    editor::OPTIONS,
    interop::OPTIONS,
    backwards_compat::OPTIONS,
    language::OPTIONS,
    diagnostics::OPTIONS,
    projects::OPTIONS,
    output_formatting::OPTIONS,
    completeness::OPTIONS,
];
