use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, ResolvedRuleSet};
use crate::ports::{ChoicePrompt, ProgressReporter, ProjectStore, TreeProvider};

/// Rules file written into the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledRules {
    /// Catalog path the content was fetched from.
    pub source: String,
    /// Location of the written file.
    pub target: PathBuf,
    pub line_count: usize,
    /// Whether an existing file was overwritten.
    pub replaced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(InstalledRules),
    /// A rules file is already present; nothing was touched.
    AlreadyInstalled { path: PathBuf },
    /// The user backed out of a prompt.
    Cancelled,
}

/// Resolve a rule set interactively and install it, refusing to overwrite.
pub fn execute<T, P, S, R>(ctx: &AppContext<T, P, S, R>) -> Result<InstallOutcome, AppError>
where
    T: TreeProvider,
    P: ChoicePrompt,
    S: ProjectStore,
    R: ProgressReporter,
{
    if ctx.project().rules_exist() {
        return Ok(InstallOutcome::AlreadyInstalled { path: ctx.project().rules_path() });
    }

    let Some(resolved) = ctx.resolver().resolve()? else {
        return Ok(InstallOutcome::Cancelled);
    };

    match deliver(ctx, &resolved, false) {
        Ok(installed) => Ok(InstallOutcome::Installed(installed)),
        // Another process installed rules while the user was choosing.
        Err(err) if is_rules_conflict(ctx.project(), &err) => {
            Ok(InstallOutcome::AlreadyInstalled { path: ctx.project().rules_path() })
        }
        Err(err) => Err(err),
    }
}

/// Fetch the resolved rules file and write it into the project.
///
/// Without `overwrite` an existing rules file fails the write with
/// `io::ErrorKind::AlreadyExists` and is left untouched.
pub(crate) fn deliver<T, P, S, R>(
    ctx: &AppContext<T, P, S, R>,
    resolved: &ResolvedRuleSet,
    overwrite: bool,
) -> Result<InstalledRules, AppError>
where
    T: TreeProvider,
    P: ChoicePrompt,
    S: ProjectStore,
    R: ProgressReporter,
{
    ctx.progress().start("Fetching RULES.md...");
    let content = match ctx.engine().provider().fetch_file(&resolved.file_path) {
        Ok(content) => content,
        Err(err) => {
            ctx.progress().fail("Failed to download RULES.md");
            return Err(err);
        }
    };

    let replaced = overwrite && ctx.project().rules_exist();
    let written = if overwrite {
        ctx.project().write_rules(&content)
    } else {
        ctx.project().create_rules(&content)
    };
    let target = match written {
        Ok(target) => target,
        Err(err) if !overwrite && is_rules_conflict(ctx.project(), &err) => {
            ctx.progress().clear();
            return Err(err);
        }
        Err(err) => {
            ctx.progress().fail("Failed to write RULES.md");
            return Err(err);
        }
    };
    ctx.progress().succeed("Downloaded RULES.md");
    info!(source = %resolved.file_path, target = %target.display(), "installed rule set");

    Ok(InstalledRules {
        source: resolved.file_path.clone(),
        target,
        line_count: content.split('\n').count(),
        replaced,
    })
}

fn is_rules_conflict<S: ProjectStore>(project: &S, err: &AppError) -> bool {
    err.kind() == io::ErrorKind::AlreadyExists && project.rules_exist()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoopProgress;
    use crate::testing::{InMemoryTree, MemoryProjectStore, ScriptedPrompt};

    fn context(
        tree: InMemoryTree,
        prompt: ScriptedPrompt,
        project: MemoryProjectStore,
    ) -> AppContext<InMemoryTree, ScriptedPrompt, MemoryProjectStore, NoopProgress> {
        AppContext::new(tree, prompt, project, NoopProgress)
    }

    #[test]
    fn installs_resolved_rule_set() {
        let tree = InMemoryTree::new().with_file("domains/api/v1/RULES.md", "# v1\nline two\n");
        let ctx = context(tree, ScriptedPrompt::answering(&["api"]), MemoryProjectStore::new());

        let installed = match execute(&ctx).unwrap() {
            InstallOutcome::Installed(installed) => installed,
            other => panic!("expected installation, got {:?}", other),
        };
        assert_eq!(installed.source, "domains/api/v1/RULES.md");
        assert_eq!(installed.line_count, 3);
        assert!(!installed.replaced);
        assert_eq!(ctx.project().content().as_deref(), Some("# v1\nline two\n"));
    }

    #[test]
    fn refuses_to_overwrite_existing_rules() {
        let tree = InMemoryTree::from_files(&["domains/web/RULES.md"]);
        let prompt = ScriptedPrompt::default();
        let ctx = context(tree, prompt, MemoryProjectStore::with_rules("mine"));

        let outcome = execute(&ctx).unwrap();

        assert!(matches!(outcome, InstallOutcome::AlreadyInstalled { .. }));
        assert_eq!(ctx.project().content().as_deref(), Some("mine"));
        assert_eq!(*ctx.project().writes.borrow(), 0);
    }

    #[test]
    fn rules_appearing_during_selection_are_kept() {
        let tree = InMemoryTree::new().with_file("domains/web/RULES.md", "catalog");
        let project = MemoryProjectStore::new();
        let ctx = context(tree, ScriptedPrompt::answering(&["web"]), project);
        let resolved = ctx.resolver().resolve().unwrap().unwrap();
        ctx.project().content.replace(Some("theirs".to_string()));

        let err = deliver(&ctx, &resolved, false).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(ctx.project().content().as_deref(), Some("theirs"));
        assert_eq!(*ctx.project().writes.borrow(), 0);
    }

    #[test]
    fn cancelled_prompt_writes_nothing() {
        let tree = InMemoryTree::from_files(&["domains/web/RULES.md"]);
        let ctx = context(tree, ScriptedPrompt::cancelling(), MemoryProjectStore::new());

        assert_eq!(execute(&ctx).unwrap(), InstallOutcome::Cancelled);
        assert_eq!(ctx.project().content(), None);
    }

    #[test]
    fn dead_end_writes_nothing() {
        let tree =
            InMemoryTree::from_files(&["domains/x/a/RULES.md"]).fail_after("domains/x/a", 1);
        let ctx = context(tree, ScriptedPrompt::answering(&["x"]), MemoryProjectStore::new());

        assert!(matches!(execute(&ctx), Err(AppError::DeadEnd { .. })));
        assert_eq!(ctx.project().content(), None);
    }

    #[test]
    fn fetch_failure_writes_nothing() {
        let tree = InMemoryTree::from_files(&["domains/web/RULES.md"]);
        let ctx = context(tree, ScriptedPrompt::answering(&["web"]), MemoryProjectStore::new());
        let resolved = ResolvedRuleSet::at("domains/missing");

        let err = deliver(&ctx, &resolved, false).unwrap_err();

        assert!(matches!(err, AppError::Fetch { path, .. } if path == "domains/missing/RULES.md"));
        assert_eq!(ctx.project().content(), None);
    }
}
