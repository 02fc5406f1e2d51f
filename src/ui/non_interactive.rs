//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are answered from `BUILDGATE_ANSWER_<KEY>` environment variables,
//! where `KEY` is the prompt key upper-cased with `-` turned into `_`, and
//! fall back to the prompt default.

use std::collections::HashMap;

use crate::error::{GateError, Result};
use crate::requirements::Choice;

use super::{OutputMode, Prompt, PromptOption, PromptResult, PromptType, UserInterface};

/// Prefix of the environment variables that answer prompts.
pub const ANSWER_ENV_PREFIX: &str = "BUILDGATE_ANSWER_";

/// Environment variable that answers the prompt with this key.
pub fn answer_env_var(key: &str) -> String {
    format!(
        "{}{}",
        ANSWER_ENV_PREFIX,
        key.to_uppercase().replace(['-', '.', ' '], "_")
    )
}

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(ANSWER_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

/// Find the option a free-form answer refers to, by value or label.
///
/// Yes/no shorthands such as `y` or `false` pick the matching choice option.
fn match_option<'a>(options: &'a [PromptOption], answer: &str) -> Option<&'a PromptOption> {
    let answer = answer.trim();
    options
        .iter()
        .find(|o| o.value.eq_ignore_ascii_case(answer) || o.label.eq_ignore_ascii_case(answer))
        .or_else(|| {
            let choice = answer.parse::<Choice>().ok()?;
            options.iter().find(|o| o.value == choice.as_str())
        })
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_var = answer_env_var(&prompt.key);
        let answer = self
            .env_overrides
            .get(&env_var)
            .or(prompt.default.as_ref())
            .cloned();

        let Some(answer) = answer else {
            return Err(GateError::NoAnswerAvailable {
                key: prompt.key.clone(),
                env_var,
            });
        };

        match &prompt.prompt_type {
            PromptType::Input { .. } => Ok(PromptResult::Text(answer)),
            PromptType::Select { options } => match match_option(options, &answer) {
                Some(option) => Ok(PromptResult::Selected(option.value.clone())),
                None => Err(GateError::InvalidAnswer {
                    key: prompt.key.clone(),
                    value: answer,
                }),
            },
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("  {}", hint);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("Step {} of {}", current, total);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
