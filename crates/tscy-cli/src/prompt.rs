//! Terminal prompts for the interactive wizard.

use std::io;

use console::{style, Term};

use tscy_core::wizard::{Choice, PromptError, Prompter};

use crate::ui::{colors, symbols};

/// Asks questions on stderr and reads answers line by line.
pub struct ConsolePrompter {
    term: Term,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn ask(&self, message: &str, hint: &str) -> Result<String, PromptError> {
        let mut lines = message.lines();
        let first = lines.next().unwrap_or_default();
        self.term
            .write_line(&format!(
                "{} {} {}",
                style(symbols::DIAMOND).fg(colors::CYAN),
                style(first).bold(),
                style(hint).fg(colors::DIM)
            ))
            .map_err(failed)?;
        for line in lines {
            self.term
                .write_line(&format!("  {}", style(line).fg(colors::DIM)))
                .map_err(failed)?;
        }
        self.term.write_str("  ").map_err(failed)?;

        let answer = self.term.read_line().map_err(failed)?;
        Ok(answer.trim().to_string())
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn failed(err: io::Error) -> PromptError {
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => PromptError::Cancelled,
        _ => PromptError::Failed(err.to_string()),
    }
}

/// `Some(answer)` for a recognised yes/no reply, `None` otherwise.
fn parse_confirm(answer: &str, default: bool) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Zero-based index for a 1-based reply; empty picks the first choice.
fn parse_select(answer: &str, len: usize) -> Option<usize> {
    if answer.is_empty() {
        return Some(0);
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

impl Prompter for ConsolePrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(message, hint)?;
            if let Some(value) = parse_confirm(&answer, default) {
                return Ok(value);
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize, PromptError> {
        let mut listing = message.to_string();
        for (i, choice) in choices.iter().enumerate() {
            listing.push_str(&format!("\n{}. {} ({})", i + 1, choice.label, choice.hint));
        }
        let hint = format!("[1-{}]", choices.len());
        loop {
            let answer = self.ask(&listing, &hint)?;
            if let Some(index) = parse_select(&answer, choices.len()) {
                return Ok(index);
            }
        }
    }

    fn text(&mut self, message: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.ask(message, &format!("({})", default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}
