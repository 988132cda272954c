use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ChoicePrompt, ProgressReporter, ProjectStore, TreeProvider};

use super::install::{InstalledRules, deliver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(InstalledRules),
    Cancelled,
}

/// Resolve a rule set interactively and write it, replacing any installed rules.
pub fn execute<T, P, S, R>(ctx: &AppContext<T, P, S, R>) -> Result<UpdateOutcome, AppError>
where
    T: TreeProvider,
    P: ChoicePrompt,
    S: ProjectStore,
    R: ProgressReporter,
{
    match ctx.resolver().resolve()? {
        Some(resolved) => Ok(UpdateOutcome::Updated(deliver(ctx, &resolved, true)?)),
        None => Ok(UpdateOutcome::Cancelled),
    }
}
