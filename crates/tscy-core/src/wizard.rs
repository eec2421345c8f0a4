//! Interactive configuration flow.
//!
//! The wizard asks a handful of questions through a [`Prompter`] and turns
//! the answers into a [`CliInput`]. The result goes through the regular
//! builder, so interactive and flag-driven runs share one code path.
//!
//! ```text
//! transpile? ──yes──► library? ──yes──► monorepo?
//!     │
//!     no ──► type-check only
//!
//! then: target environment ──► lib
//! ```

use thiserror::Error;
use tracing::debug;

use crate::builder::CliInput;
use crate::diagnostic::GeneratorError;

/// Failure of a single prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The user backed out (Ctrl-C, Escape).
    #[error("cancelled")]
    Cancelled,

    #[error("{0}")]
    Failed(String),
}

impl From<PromptError> for GeneratorError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => GeneratorError::Cancelled,
            PromptError::Failed(message) => GeneratorError::PromptFailed { message },
        }
    }
}

/// One entry of a select prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub hint: &'static str,
}

/// Terminal-side question asking.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Asks the user to pick one of `choices`, returning its index.
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize, PromptError>;

    /// Asks for free text, offering `default`.
    fn text(&mut self, message: &str, default: &str) -> Result<String, PromptError>;
}

struct Question {
    short: &'static str,
    detail: &'static str,
}

impl Question {
    fn message(&self, verbose: bool) -> String {
        if verbose {
            format!("{}\n{}", self.short, self.detail)
        } else {
            self.short.to_string()
        }
    }
}

const TRANSPILE: Question = Question {
    short: "Transpile TypeScript to JavaScript?",
    detail: "  yes: compile TS to JS and emit files\n  no:  type-check only, no output",
};

const LIBRARY: Question = Question {
    short: "Building a library package?",
    detail: "  yes: library, emits .d.ts files\n  no:  application, no type definitions",
};

const MONOREPO: Question = Question {
    short: "Part of a monorepo?",
    detail: "  yes: enables project references\n  no:  standalone package",
};

const ENVIRONMENT: &str = "Target environment:";

const ENVIRONMENTS: &[Choice] = &[
    Choice {
        label: "Browser",
        hint: "DOM + Web APIs",
    },
    Choice {
        label: "Node.js",
        hint: "Server-side runtime",
    },
    Choice {
        label: "Universal",
        hint: "Browser + Node.js",
    },
];

const NODE_ENVIRONMENT: usize = 1;

/// Options every wizard run starts from.
const BASE_OPTIONS: &[(&str, &str)] = &[
    ("esModuleInterop", "true"),
    ("skipLibCheck", "true"),
    ("target", "es2022"),
    ("allowJs", "true"),
    ("resolveJsonModule", "true"),
    ("moduleDetection", "force"),
    ("isolatedModules", "true"),
    ("verbatimModuleSyntax", "true"),
    ("strict", "true"),
    ("noUncheckedIndexedAccess", "true"),
    ("noImplicitOverride", "true"),
];

/// Runs the question flow and returns the equivalent flag input.
pub fn run_wizard(prompter: &mut dyn Prompter, verbose: bool) -> Result<CliInput, GeneratorError> {
    let mut input = CliInput::new();
    for (option, raw) in BASE_OPTIONS {
        input.set(*option, *raw);
    }

    if prompter.confirm(&TRANSPILE.message(verbose), true)? {
        input
            .set("module", "NodeNext")
            .set("outDir", "dist")
            .set("sourceMap", "true");

        if prompter.confirm(&LIBRARY.message(verbose), false)? {
            input.set("declaration", "true");

            if prompter.confirm(&MONOREPO.message(verbose), false)? {
                input.set("composite", "true").set("declarationMap", "true");
            }
        }
    } else {
        input
            .set("module", "preserve")
            .set("moduleResolution", "bundler")
            .set("noEmit", "true");
    }

    let environment = prompter.select(ENVIRONMENT, ENVIRONMENTS)?;
    let lib = if environment == NODE_ENVIRONMENT {
        "es2022"
    } else {
        "es2022,dom,dom.iterable"
    };
    input.set("lib", lib);

    debug!(options = input.values.len(), "wizard answers collected");
    Ok(input)
}

/// Asks where to write the file, re-asking until the answer is non-empty.
pub fn prompt_output_path(
    prompter: &mut dyn Prompter,
    default: &str,
) -> Result<String, GeneratorError> {
    loop {
        let answer = prompter.text("Where to save the config file?", default)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    enum Answer {
        Confirm(bool),
        Select(usize),
        Text(&'static str),
        Cancel,
    }

    /// Replays canned answers in order.
    struct Scripted {
        answers: VecDeque<Answer>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, message: &str) -> Answer {
            self.asked.push(message.to_string());
            self.answers.pop_front().expect("no scripted answer left")
        }
    }

    impl Prompter for Scripted {
        fn confirm(&mut self, message: &str, _default: bool) -> Result<bool, PromptError> {
            match self.next(message) {
                Answer::Confirm(value) => Ok(value),
                Answer::Cancel => Err(PromptError::Cancelled),
                _ => panic!("unexpected confirm: {}", message),
            }
        }

        fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize, PromptError> {
            match self.next(message) {
                Answer::Select(index) => {
                    assert!(index < choices.len());
                    Ok(index)
                }
                Answer::Cancel => Err(PromptError::Cancelled),
                _ => panic!("unexpected select: {}", message),
            }
        }

        fn text(&mut self, message: &str, _default: &str) -> Result<String, PromptError> {
            match self.next(message) {
                Answer::Text(value) => Ok(value.to_string()),
                Answer::Cancel => Err(PromptError::Cancelled),
                _ => panic!("unexpected text: {}", message),
            }
        }
    }

    fn value<'a>(input: &'a CliInput, name: &str) -> Option<&'a str> {
        input.values.get(name).map(String::as_str)
    }

    #[test]
    fn test_monorepo_library() {
        let mut prompter = Scripted::new(vec![
            Answer::Confirm(true),
            Answer::Confirm(true),
            Answer::Confirm(true),
            Answer::Select(1),
        ]);
        let input = run_wizard(&mut prompter, false).unwrap();
        assert_eq!(value(&input, "module"), Some("NodeNext"));
        assert_eq!(value(&input, "outDir"), Some("dist"));
        assert_eq!(value(&input, "declaration"), Some("true"));
        assert_eq!(value(&input, "composite"), Some("true"));
        assert_eq!(value(&input, "declarationMap"), Some("true"));
        assert_eq!(value(&input, "lib"), Some("es2022"));
        assert_eq!(value(&input, "strict"), Some("true"));
    }

    #[test]
    fn test_application_skips_monorepo_question() {
        let mut prompter = Scripted::new(vec![
            Answer::Confirm(true),
            Answer::Confirm(false),
            Answer::Select(0),
        ]);
        let input = run_wizard(&mut prompter, false).unwrap();
        assert_eq!(prompter.asked.len(), 3);
        assert!(value(&input, "declaration").is_none());
        assert_eq!(value(&input, "lib"), Some("es2022,dom,dom.iterable"));
    }

    #[test]
    fn test_type_check_only() {
        let mut prompter = Scripted::new(vec![Answer::Confirm(false), Answer::Select(2)]);
        let input = run_wizard(&mut prompter, false).unwrap();
        assert_eq!(value(&input, "module"), Some("preserve"));
        assert_eq!(value(&input, "noEmit"), Some("true"));
        assert!(value(&input, "outDir").is_none());
    }

    #[test]
    fn test_verbose_questions_carry_detail() {
        let mut prompter = Scripted::new(vec![Answer::Confirm(false), Answer::Select(0)]);
        run_wizard(&mut prompter, true).unwrap();
        assert!(prompter.asked[0].contains("type-check only"));
    }

    #[test]
    fn test_cancel_aborts() {
        let mut prompter = Scripted::new(vec![Answer::Confirm(true), Answer::Cancel]);
        assert!(matches!(
            run_wizard(&mut prompter, false),
            Err(GeneratorError::Cancelled)
        ));
    }

    #[test]
    fn test_output_path_reasks_on_blank() {
        let mut prompter = Scripted::new(vec![Answer::Text("  "), Answer::Text("configs/tsconfig.json")]);
        let path = prompt_output_path(&mut prompter, "./tsconfig.json").unwrap();
        assert_eq!(path, "configs/tsconfig.json");
        assert_eq!(prompter.asked.len(), 2);
    }
}
