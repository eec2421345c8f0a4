//! tscy CLI UI primitives.

use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use tscy_core::validate::Issue;
use tscy_core::ConfigDocument;

pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);
    pub const MAGENTA: Color = Color::Color256(201);
    pub const AMBER: Color = Color::Color256(214);
    pub const GREEN: Color = Color::Color256(82);
    pub const DIM: Color = Color::Color256(240);
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}"; // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}"; // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}"; // ◉
    pub const TRIANGLE: &str = "\u{25B8}"; // ▸
    pub const WARNING: &str = "!";
}

/// Path as the user should see it: relative to the current directory, with
/// a `./` prefix, unless it lies outside it.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    match pathdiff::diff_paths(&absolute, cwd) {
        Some(relative) if !relative.starts_with("..") => {
            format!("./{}", relative.display())
        }
        _ => absolute.display().to_string(),
    }
}

pub fn success(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::TARGET_FILLED).fg(colors::GREEN),
        msg
    );
}

pub fn error(msg: &str) {
    eprintln!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::MAGENTA),
        style(msg).fg(colors::MAGENTA)
    );
}

pub fn warning(msg: &str) {
    eprintln!(
        "  {} {}",
        style(symbols::WARNING).fg(colors::AMBER).bold(),
        msg
    );
}

pub fn info(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        msg
    );
}

pub fn dim(msg: &str) {
    println!("  {}", style(msg).fg(colors::DIM));
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let template = ProgressStyle::default_spinner()
        .tick_chars("\u{25CE}\u{25C9}\u{25CE}\u{25C9}") // ◎◉◎◉
        .template("  {spinner:.cyan} {msg}");
    if let Ok(template) = template {
        pb.set_style(template);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Prints warnings, then errors, to stderr.
pub fn report(warnings: &[Issue], errors: &[Issue]) {
    if !warnings.is_empty() {
        eprintln!("{}", style("Warnings:").fg(colors::AMBER).bold());
        for issue in warnings {
            warning(&issue.message);
        }
    }
    if !errors.is_empty() {
        eprintln!("{}", style("Configuration errors:").fg(colors::MAGENTA).bold());
        for issue in errors {
            error(&issue.message);
        }
    }
}

/// Lines of the `--verbose` summary.
pub fn summary_lines(document: &ConfigDocument, shown_path: &str) -> Vec<String> {
    let options = &document.compiler_options;
    let flag = |name: &str| options.is_true(name);

    let mut lines = vec![
        format!("Output: {}", shown_path),
        format!("Target: {}", options.get_str("target").unwrap_or("es5")),
        format!("Module: {}", options.get_str("module").unwrap_or("commonjs")),
        format!(
            "Module Resolution: {}",
            options.get_str("moduleResolution").unwrap_or("classic")
        ),
        format!("Strict: {}", flag("strict")),
        format!("Declaration: {}", flag("declaration")),
        format!("Source Maps: {}", flag("sourceMap")),
    ];
    if let Some(out_dir) = options.get_str("outDir") {
        lines.push(format!("Output Directory: {}", out_dir));
    }
    if let Some(include) = &document.include {
        lines.push(format!("Include: {:?}", include));
    }
    if let Some(exclude) = &document.exclude {
        lines.push(format!("Exclude: {:?}", exclude));
    }
    lines
}

pub fn summary(document: &ConfigDocument, shown_path: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        style("Generated TypeScript configuration").bold()
    );
    for line in summary_lines(document, shown_path) {
        println!(
            "    {} {}",
            style(symbols::TRIANGLE).fg(colors::DIM),
            line
        );
    }
    println!();
}

pub fn next_steps(shown_path: &str) {
    println!();
    info("Next steps:");
    dim(&format!("1. Review the configuration: cat {}", shown_path));
    dim("2. Install dependencies: npm install typescript @types/node --save-dev");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscy_core::{build, CliInput, Registry};

    #[test]
    fn test_display_path_inside_cwd() {
        let cwd = Path::new("/work/app");
        assert_eq!(display_path(Path::new("tsconfig.json"), cwd), "./tsconfig.json");
        assert_eq!(
            display_path(Path::new("./configs/tsconfig.json"), cwd),
            "./configs/tsconfig.json"
        );
        assert_eq!(
            display_path(Path::new("/work/app/tsconfig.json"), cwd),
            "./tsconfig.json"
        );
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let cwd = Path::new("/work/app");
        assert_eq!(
            display_path(Path::new("/etc/tsconfig.json"), cwd),
            "/etc/tsconfig.json"
        );
    }

    #[test]
    fn test_summary_lines() {
        let registry = Registry::new().unwrap();
        let mut input = CliInput::new();
        input.set("outDir", "dist").set("strict", "true");
        let doc = build(&registry, &input).unwrap();

        let lines = summary_lines(&doc, "./tsconfig.json");
        assert_eq!(lines[0], "Output: ./tsconfig.json");
        assert!(lines.contains(&"Target: es2022".to_string()));
        assert!(lines.contains(&"Strict: true".to_string()));
        assert!(lines.contains(&"Output Directory: dist".to_string()));
        assert!(lines.contains(&r#"Exclude: ["node_modules", "dist"]"#.to_string()));
    }
}
