//! Terminal prompts used by the wizard
//!
//! The wizard only talks to [`Prompter`]; [`InquirePrompter`] renders the
//! prompts with inquire.

use crate::error::{CliError, Result};
use crate::wizard::render::wizard_render_config;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, InquireError, Select, Text};

pub trait Prompter {
    /// Free-text input; when `allow_empty` is false the prompt repeats until
    /// something other than whitespace is entered
    fn input(&mut self, message: &str, allow_empty: bool) -> Result<String>;

    /// Single choice among `options`; `None` when the user backs out or there
    /// is nothing to choose from
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<&str>,
    ) -> Result<Option<String>>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(err: InquireError) -> CliError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => CliError::Cancelled,
        other => CliError::Prompt(other.to_string()),
    }
}

fn required(value: &str) -> std::result::Result<Validation, CustomUserError> {
    if value.trim().is_empty() {
        Ok(Validation::Invalid("A value is required".into()))
    } else {
        Ok(Validation::Valid)
    }
}

impl Prompter for InquirePrompter {
    fn input(&mut self, message: &str, allow_empty: bool) -> Result<String> {
        let mut prompt = Text::new(message).with_render_config(wizard_render_config());
        if !allow_empty {
            prompt = prompt.with_validator(required);
        }

        prompt
            .prompt()
            .map(|value| value.trim().to_string())
            .map_err(prompt_error)
    }

    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<&str>,
    ) -> Result<Option<String>> {
        if options.is_empty() {
            return Ok(None);
        }

        let cursor = default
            .and_then(|d| options.iter().position(|o| o == d))
            .unwrap_or(0);

        match Select::new(message, options.to_vec())
            .with_render_config(wizard_render_config())
            .with_starting_cursor(cursor)
            .with_help_message("Use ↑/↓ to navigate, Enter to select")
            .prompt()
        {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(e) => Err(prompt_error(e)),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message)
            .with_default(default)
            .with_render_config(wizard_render_config())
            .prompt()
            .map_err(prompt_error)
    }
}
