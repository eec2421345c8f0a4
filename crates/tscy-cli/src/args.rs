//! Command-line surface.
//!
//! Meta flags are declared with clap's derive API. Compiler option flags are
//! generated from the registry at startup, one `--<name>` per option.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};

use tscy_core::builder::{TypeAcquisitionInput, WatchInput};
use tscy_core::registry::{OptionKind, Registry};
use tscy_core::{CliInput, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "tscy")]
#[command(about = "Generate tsconfig.json from flags, presets or an interactive wizard")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct MetaArgs {
    /// Start from a preset configuration
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Output file path [default: ./tsconfig.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,

    /// Show usage
    #[arg(short, long)]
    pub help: bool,

    /// Show every compiler option
    #[arg(long)]
    pub help_options: bool,

    /// Show one compiler option
    #[arg(long, value_name = "NAME")]
    pub help_option: Option<String>,

    /// Show what a preset sets
    #[arg(long, value_name = "NAME")]
    pub help_preset: Option<String>,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Show detailed output
    #[arg(long)]
    pub verbose: bool,

    /// Answer a few questions instead of passing flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2, value_name = "N")]
    pub indent: usize,

    /// Include patterns (JSON array or comma-separated)
    #[arg(long, value_name = "PATTERNS")]
    pub include: Option<String>,

    /// Exclude patterns (JSON array or comma-separated)
    #[arg(long, value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Base configuration(s) to extend
    #[arg(long, value_name = "PATH")]
    pub extends: Option<String>,

    /// Specific files to include
    #[arg(long, value_name = "FILES")]
    pub files: Option<String>,

    /// Project references (JSON array or comma-separated paths)
    #[arg(long, value_name = "REFS")]
    pub references: Option<String>,

    #[arg(long, value_name = "KIND")]
    pub watch_file: Option<String>,

    #[arg(long, value_name = "KIND")]
    pub watch_directory: Option<String>,

    #[arg(long, value_name = "KIND")]
    pub fallback_polling: Option<String>,

    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub synchronous_watch_directory: Option<String>,

    #[arg(long, value_name = "DIRS")]
    pub exclude_directories: Option<String>,

    #[arg(long, value_name = "FILES")]
    pub exclude_files: Option<String>,

    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub type_acquisition_enable: Option<String>,

    #[arg(long, value_name = "PACKAGES")]
    pub type_acquisition_include: Option<String>,

    #[arg(long, value_name = "PACKAGES")]
    pub type_acquisition_exclude: Option<String>,

    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub disable_filename_based_type_acquisition: Option<String>,
}

impl MetaArgs {
    pub fn generator_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            output: self.output.clone().unwrap_or(defaults.output),
            force: self.force,
            indent: self.indent,
            verbose: self.verbose,
        }
    }

    fn watch_input(&self) -> WatchInput {
        WatchInput {
            watch_file: self.watch_file.clone(),
            watch_directory: self.watch_directory.clone(),
            fallback_polling: self.fallback_polling.clone(),
            synchronous_watch_directory: self.synchronous_watch_directory.clone(),
            exclude_directories: self.exclude_directories.clone(),
            exclude_files: self.exclude_files.clone(),
        }
    }

    fn type_acquisition_input(&self) -> TypeAcquisitionInput {
        TypeAcquisitionInput {
            enable: self.type_acquisition_enable.clone(),
            include: self.type_acquisition_include.clone(),
            exclude: self.type_acquisition_exclude.clone(),
            disable_filename_based_type_acquisition: self
                .disable_filename_based_type_acquisition
                .clone(),
        }
    }
}

/// Parsed command line.
#[derive(Debug)]
pub struct Invocation {
    pub meta: MetaArgs,
    pub input: CliInput,
}

/// The full clap command: meta flags plus one flag per registry option.
pub fn command(registry: &Registry) -> Command {
    registry.iter().fold(MetaArgs::command(), |cmd, def| {
        let arg = Arg::new(def.name)
            .long(def.name)
            .value_name(def.kind.value_name())
            .action(ArgAction::Set)
            .hide(true);

        let arg = match def.kind {
            OptionKind::Boolean => arg.num_args(0..=1).default_missing_value("true"),
            _ => arg.num_args(1).allow_hyphen_values(true),
        };
        cmd.arg(arg)
    })
}

pub fn parse_from<I, T>(registry: &Registry, args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command(registry).try_get_matches_from(args)?;
    let meta = MetaArgs::from_arg_matches(&matches)?;
    let input = collect_input(registry, &meta, &matches);
    Ok(Invocation { meta, input })
}

fn collect_input(registry: &Registry, meta: &MetaArgs, matches: &ArgMatches) -> CliInput {
    let mut input = CliInput::new();
    for def in registry.iter() {
        if let Some(raw) = matches.get_one::<String>(def.name) {
            input.set(def.name, raw.clone());
        }
    }

    input.preset = meta.preset.clone();
    input.include = meta.include.clone();
    input.exclude = meta.exclude.clone();
    input.files = meta.files.clone();
    input.extends = meta.extends.clone();
    input.references = meta.references.clone();
    input.watch = meta.watch_input();
    input.type_acquisition = meta.type_acquisition_input();
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, clap::Error> {
        let registry = Registry::new().unwrap();
        parse_from(&registry, std::iter::once("tscy").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        command(&Registry::new().unwrap()).debug_assert();
    }

    #[test]
    fn test_meta_defaults() {
        let inv = parse(&[]).unwrap();
        assert!(inv.meta.output.is_none());
        let config = inv.meta.generator_config();
        assert_eq!(config.output, PathBuf::from("./tsconfig.json"));
        assert_eq!(config.indent, 2);
        assert!(!inv.meta.force);
        assert!(inv.input.values.is_empty());
    }

    #[test]
    fn test_bare_boolean_means_true() {
        let inv = parse(&["--strict", "--target", "es2020"]).unwrap();
        assert_eq!(inv.input.values["strict"], "true");
        assert_eq!(inv.input.values["target"], "es2020");
    }

    #[test]
    fn test_explicit_boolean_value() {
        let inv = parse(&["--strict", "false"]).unwrap();
        assert_eq!(inv.input.values["strict"], "false");
    }

    #[test]
    fn test_short_meta_flags() {
        let inv = parse(&["-o", "out/tsconfig.json", "-f", "-v"]).unwrap();
        assert_eq!(inv.meta.output, Some(PathBuf::from("out/tsconfig.json")));
        assert!(inv.meta.force);
        assert!(inv.meta.version);
    }

    #[test]
    fn test_structure_flags() {
        let inv = parse(&[
            "--preset",
            "library",
            "--include",
            "src",
            "--references",
            "../core",
            "--watch-file",
            "useFsEvents",
            "--type-acquisition-enable",
        ])
        .unwrap();
        assert_eq!(inv.input.preset.as_deref(), Some("library"));
        assert_eq!(inv.input.include.as_deref(), Some("src"));
        assert_eq!(inv.input.references.as_deref(), Some("../core"));
        assert_eq!(inv.input.watch.watch_file.as_deref(), Some("useFsEvents"));
        assert_eq!(inv.input.type_acquisition.enable.as_deref(), Some("true"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(parse(&["--strictest"]).is_err());
    }

    #[test]
    fn test_object_flag_value() {
        let inv = parse(&["--paths", r#"{"@/*": ["./src/*"]}"#]).unwrap();
        assert_eq!(inv.input.values["paths"], r#"{"@/*": ["./src/*"]}"#);
    }
}
