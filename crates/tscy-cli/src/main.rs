//! tscy CLI.
//!
//! Generates `tsconfig.json` from compiler option flags, a preset, or the
//! interactive wizard.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tscy_core::wizard::{self, Prompter};
use tscy_core::{CliInput, Generator, GeneratorConfig, GeneratorError, Registry};

mod args;
mod help;
mod prompt;
mod ui;

fn main() -> miette::Result<()> {
    let registry = Registry::new()?;

    let invocation = match args::parse_from(&registry, std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            let _ = err.print();
            eprintln!("\nRun 'tscy --help' for usage.");
            std::process::exit(1);
        }
    };
    let meta = &invocation.meta;

    init_logging(meta.verbose)?;

    if meta.help {
        print!("{}", help::usage());
        return Ok(());
    }

    if meta.help_options {
        print!("{}", help::options(&registry));
        return Ok(());
    }

    if let Some(name) = &meta.help_option {
        match help::option(&registry, name) {
            Ok(text) => print!("{}", text),
            Err(available) => {
                ui::error(&format!("Unknown option: {}", name));
                print!("{}", available);
            }
        }
        return Ok(());
    }

    if let Some(name) = &meta.help_preset {
        print!("{}", help::preset(name)?);
        return Ok(());
    }

    if meta.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = meta.generator_config();

    if meta.interactive {
        if !atty::is(atty::Stream::Stdin) {
            return Err(miette::miette!(
                "Interactive mode needs a terminal. Pass options as flags instead."
            ));
        }
        let explicit_output = meta.output.is_some();
        return match run_interactive(registry, config, explicit_output) {
            Err(GeneratorError::Cancelled) => {
                ui::dim("Operation cancelled.");
                Ok(())
            }
            other => other.map_err(Into::into),
        };
    }

    let generator = Generator::with_registry(registry, config);
    generate(&generator, &invocation.input)?;
    Ok(())
}

fn init_logging(verbose: bool) -> miette::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).into_diagnostic()
}

/// Builds, validates and writes. Exits with status 1 on validation errors.
fn generate(generator: &Generator, input: &CliInput) -> Result<(), GeneratorError> {
    let generation = generator.prepare(input)?;
    let validation = &generation.validation;

    ui::report(&validation.warnings, &validation.errors);
    if !validation.is_valid {
        std::process::exit(1);
    }

    let spinner = ui::spinner("Generating TypeScript configuration");
    let written = generator.write(&generation);
    spinner.finish_and_clear();
    let report = written?;

    let cwd = std::env::current_dir().unwrap_or_default();
    let shown = ui::display_path(&report.path, &cwd);
    if generator.config().verbose {
        ui::summary(&generation.document, &shown);
    } else {
        ui::success(&format!("Generated {}", shown));
    }
    Ok(())
}

/// Asks for the output location first, then runs the wizard questions.
fn run_interactive(
    registry: Registry,
    mut config: GeneratorConfig,
    explicit_output: bool,
) -> Result<(), GeneratorError> {
    let mut prompter = prompt::ConsolePrompter::new();
    let cwd = std::env::current_dir().unwrap_or_default();

    if !explicit_output {
        let default = config.output.display().to_string();
        config.output = wizard::prompt_output_path(&mut prompter, &default)?.into();
    }

    confirm_directory(&mut prompter, &config.output, &cwd)?;

    if config.output.exists() && !config.force {
        let question = format!(
            "File {} already exists. Overwrite?",
            ui::display_path(&config.output, &cwd)
        );
        if !prompter.confirm(&question, false)? {
            return Err(GeneratorError::FileExists {
                path: config.output.clone(),
            });
        }
        config.force = true;
    }

    let input = wizard::run_wizard(&mut prompter, config.verbose)?;
    let generator = Generator::with_registry(registry, config);
    generate(&generator, &input)?;

    let shown = ui::display_path(&generator.config().output, &cwd);
    ui::next_steps(&shown);
    Ok(())
}

fn confirm_directory(
    prompter: &mut dyn Prompter,
    output: &Path,
    cwd: &Path,
) -> Result<(), GeneratorError> {
    let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }

    let question = format!(
        "Directory {} doesn't exist. Create it?",
        ui::display_path(parent, cwd)
    );
    if prompter.confirm(&question, true)? {
        Ok(())
    } else {
        Err(GeneratorError::Cancelled)
    }
}
