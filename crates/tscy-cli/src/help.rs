//! Help text rendering.

use std::fmt::Write as _;

use console::style;

use tscy_core::preset::{self, Preset};
use tscy_core::registry::{OptionDefinition, Registry};
use tscy_core::GeneratorError;

pub fn usage() -> String {
    format!(
        r#"
{usage}
  tscy [options]

{meta}
  -o, --output <path>           Output file path (default: ./tsconfig.json)
  -f, --force                   Overwrite existing file
  -h, --help                    Show this help
  -v, --version                 Show version
  -i, --interactive             Answer a few questions instead of passing flags
  --verbose                     Show detailed output
  --indent <n>                  Spaces per indentation level (default: 2)
  --preset <name>               Use preset configuration ({presets})
  --help-preset <name>          Show what a preset sets

{config}
  --include <pattern>           Include patterns (JSON array or comma-separated)
  --exclude <pattern>           Exclude patterns (JSON array or comma-separated)
  --extends <path>              Extend from another config
  --files <list>                Specific files to include
  --references <refs>           Project references (JSON array or comma-separated)

{watch}
  --watch-file <kind>           --watch-directory <kind>      --fallback-polling <kind>
  --synchronous-watch-directory --exclude-directories <list>  --exclude-files <list>
  --type-acquisition-enable     --type-acquisition-include    --type-acquisition-exclude
  --disable-filename-based-type-acquisition

{compiler}
All TypeScript compiler options are supported with -- prefix.
Use --help-options to see detailed information about all options.

{examples}
  # Generate minimal config
  tscy --preset minimal

  # Generate library config
  tscy --preset library --outDir dist --declaration

  # Generate React config
  tscy --preset react --jsx react-jsx

  # Custom configuration
  tscy --target es2020 --module commonjs --strict true

  # Show all available options
  tscy --help-options

For more information: https://www.typescriptlang.org/tsconfig
"#,
        usage = style("USAGE:").bold(),
        meta = style("META OPTIONS:").bold(),
        presets = preset::names().join(", "),
        config = style("CONFIGURATION OPTIONS:").bold(),
        watch = style("WATCH AND TYPE ACQUISITION:").bold(),
        compiler = style("COMPILER OPTIONS:").bold(),
        examples = style("EXAMPLES:").bold(),
    )
}

/// Every option, grouped by category.
pub fn options(registry: &Registry) -> String {
    let mut out = String::from("\nTypeScript Compiler Options Reference\n\n");

    for (category, definitions) in registry.by_category() {
        let title = category.title().to_uppercase();
        let _ = writeln!(out, "{}:", style(&title).bold());
        let _ = writeln!(out, "{}", "=".repeat(title.len() + 1));

        for def in definitions {
            out.push('\n');
            let _ = writeln!(out, "  {}", flag_line(def));
            let _ = writeln!(out, "    Type: {}", type_line(def));
            let _ = writeln!(out, "    Default: {}", default_line(def));
            let _ = writeln!(out, "    Since: TypeScript {}", def.since.unwrap_or("unknown"));
            let _ = writeln!(out, "\n    {}", def.description);

            if !def.examples.is_empty() {
                let _ = writeln!(out, "\n    Examples:");
                for example in def.examples {
                    let _ = writeln!(out, "      {}", example);
                }
            }
            if !def.related.is_empty() {
                let _ = writeln!(out, "\n    Related: {}", def.related.join(", "));
            }
        }
        out.push('\n');
    }

    out
}

/// Details for one option, or the sorted list of names when it is unknown.
pub fn option(registry: &Registry, name: &str) -> Result<String, String> {
    let Some(def) = registry.get(name) else {
        let mut list = String::from("\nAvailable options:\n");
        for name in registry.sorted_names() {
            let _ = writeln!(list, "  --{}", name);
        }
        return Err(list);
    };

    let mut out = String::new();
    let _ = writeln!(out, "\nOption: {}", flag_line(def));
    let _ = writeln!(out, "Category: {}", def.category);
    let _ = writeln!(out, "Type: {}", type_line(def));
    let _ = writeln!(out, "Default: {}", default_line(def));
    let _ = writeln!(out, "Since: TypeScript {}", def.since.unwrap_or("unknown"));
    let _ = writeln!(out, "\nDescription:\n{}", def.description);

    if !def.examples.is_empty() {
        let _ = writeln!(out, "\nExamples:");
        for example in def.examples {
            let _ = writeln!(out, "  {}", example);
        }
    }
    if !def.related.is_empty() {
        let _ = writeln!(out, "\nRelated options: {}", def.related.join(", "));
        if def.deprecated {
            let _ = writeln!(
                out,
                "\nThis option is deprecated. Consider using: {}",
                def.related.join(", ")
            );
        }
    }

    Ok(out)
}

/// What a preset sets.
pub fn preset(name: &str) -> Result<String, GeneratorError> {
    let preset: &Preset = preset::find(name)?;

    let mut out = String::new();
    let _ = writeln!(out, "\nPreset: {}", style(preset.name).bold());
    let _ = writeln!(out, "{}\n", preset.description);
    let width = preset
        .values
        .iter()
        .map(|(option, _)| option.len())
        .max()
        .unwrap_or(0);
    for (option, raw) in preset.values {
        let _ = writeln!(out, "  --{:width$}  {}", option, raw, width = width);
    }
    Ok(out)
}

fn flag_line(def: &OptionDefinition) -> String {
    if def.deprecated {
        format!("--{} (DEPRECATED)", def.name)
    } else {
        format!("--{}", def.name)
    }
}

fn type_line(def: &OptionDefinition) -> String {
    match def.choices {
        Some(choices) => format!("{} ({})", def.kind, choices.join(" | ")),
        None => def.kind.to_string(),
    }
}

fn default_line(def: &OptionDefinition) -> String {
    match &def.default {
        Some(default) => default.to_value().to_json().to_string(),
        None => "none".to_string(),
    }
}
