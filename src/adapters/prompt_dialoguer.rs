use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Select};

use crate::domain::AppError;
use crate::ports::ChoicePrompt;

/// Terminal selection prompt backed by `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl ChoicePrompt for DialoguerPrompt {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        match Select::new().with_prompt(prompt).items(items).default(0).interact_opt() {
            Ok(selection) => Ok(selection),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(format!("Failed to read selection: {}", err))),
        }
    }
}
