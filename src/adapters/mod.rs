mod progress_spinner;
mod project_filesystem;
mod prompt_dialoguer;
mod tree_filesystem;
mod tree_github;

pub use progress_spinner::SpinnerProgress;
pub use project_filesystem::FilesystemProjectStore;
pub use prompt_dialoguer::DialoguerPrompt;
pub use tree_filesystem::FilesystemTreeProvider;
pub use tree_github::GitHubTreeProvider;
