use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::ChoicePrompt;

/// Prompt answering from a script of labels; `None` simulates cancellation.
///
/// Any prompt beyond the script fails.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<(String, Vec<String>)>>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| Some(a.to_string())).collect()),
            asked: RefCell::default(),
        }
    }

    pub fn cancelling() -> Self {
        Self { answers: RefCell::new(VecDeque::from([None])), asked: RefCell::default() }
    }

    /// Prompts shown so far with the choices offered.
    pub fn asked(&self) -> Vec<(String, Vec<String>)> {
        self.asked.borrow().clone()
    }
}

impl ChoicePrompt for ScriptedPrompt {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        self.asked.borrow_mut().push((prompt.to_string(), items.to_vec()));
        let answer = self
            .answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("unexpected prompt: {}", prompt)))?;
        match answer {
            None => Ok(None),
            Some(label) => items
                .iter()
                .position(|item| *item == label)
                .map(Some)
                .ok_or_else(|| AppError::Prompt(format!("'{}' not offered in {:?}", label, items))),
        }
    }
}
