use crate::ports::{ChoicePrompt, ProgressReporter, ProjectStore, TreeProvider};
use crate::services::{DiscoveryEngine, InteractiveResolver};

/// Application context holding dependencies for command execution.
pub struct AppContext<T, P, S, R>
where
    T: TreeProvider,
    P: ChoicePrompt,
    S: ProjectStore,
    R: ProgressReporter,
{
    engine: DiscoveryEngine<T>,
    prompt: P,
    project: S,
    progress: R,
}

impl<T, P, S, R> AppContext<T, P, S, R>
where
    T: TreeProvider,
    P: ChoicePrompt,
    S: ProjectStore,
    R: ProgressReporter,
{
    /// Create a new application context.
    pub fn new(tree: T, prompt: P, project: S, progress: R) -> Self {
        Self { engine: DiscoveryEngine::new(tree), prompt, project, progress }
    }

    /// Get a reference to the discovery engine.
    pub fn engine(&self) -> &DiscoveryEngine<T> {
        &self.engine
    }

    /// Get a reference to the project store.
    pub fn project(&self) -> &S {
        &self.project
    }

    /// Get a reference to the progress reporter.
    pub fn progress(&self) -> &R {
        &self.progress
    }

    /// Build a resolver over this context's engine and prompt.
    pub fn resolver(&self) -> InteractiveResolver<'_, T, P, R> {
        InteractiveResolver::new(&self.engine, &self.prompt, &self.progress)
    }
}
