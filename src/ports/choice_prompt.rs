use crate::domain::AppError;

/// Port for the single-selection prompt widget.
pub trait ChoicePrompt {
    /// Ask the user to pick one of `items`.
    ///
    /// Returns the selected index, or `None` when the user cancels.
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError>;
}
