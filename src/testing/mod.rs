mod in_memory_tree;
mod memory_project_store;
mod scripted_prompt;

pub use in_memory_tree::InMemoryTree;
pub use memory_project_store::MemoryProjectStore;
pub use scripted_prompt::ScriptedPrompt;
