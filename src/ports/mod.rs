mod choice_prompt;
mod progress;
mod project_store;
mod tree_provider;

pub use choice_prompt::ChoicePrompt;
pub use progress::{NoopProgress, ProgressReporter};
pub use project_store::ProjectStore;
pub use tree_provider::TreeProvider;
