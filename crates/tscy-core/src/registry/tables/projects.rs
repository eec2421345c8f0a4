//! Project reference and build-mode options.

use crate::registry::definition::{Category, OptionDefinition, OptionKind};

const C: Category = Category::Projects;

pub(crate) const OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new("composite", OptionKind::Boolean, C)
        .default_bool(false)
        .since("3.0")
        .related(&["incremental", "tsBuildInfoFile", "declaration"])
        .describe("Enable the constraints that let build mode reason about this project as a reference."),
    OptionDefinition::new("disableReferencedProjectLoad", OptionKind::Boolean, C)
        .default_bool(false)
        .since("4.0")
        .describe("Load referenced projects into the editor only on demand."),
    OptionDefinition::new("disableSolutionSearching", OptionKind::Boolean, C)
        .default_bool(false)
        .since("3.8")
        .describe("Exclude this project from editor-wide searches across a solution."),
    OptionDefinition::new("disableSourceOfProjectReferenceRedirect", OptionKind::Boolean, C)
        .default_bool(false)
        .since("3.7")
        .describe("Use declaration files of referenced projects instead of their sources in the editor."),
    OptionDefinition::new("incremental", OptionKind::Boolean, C)
        .default_bool(false)
        .since("3.4")
        .related(&["composite", "tsBuildInfoFile"])
        .describe("Save project graph information so later builds can be faster."),
    OptionDefinition::new("tsBuildInfoFile", OptionKind::String, C)
        .since("3.4")
        .related(&["incremental", "composite"])
        .examples(&["\".tsbuildinfo\"", "\"build/project.tsbuildinfo\"", "\"dist/.tsbuildinfo\""])
        .describe("File used to store incremental build information."),
];
