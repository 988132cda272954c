//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the terminal prompt and spinner.

use std::path::PathBuf;

use crate::adapters::{
    DialoguerPrompt, FilesystemProjectStore, FilesystemTreeProvider, GitHubTreeProvider,
    SpinnerProgress,
};
use crate::app::{
    AppContext,
    commands::{install, list, update},
};
use crate::ports::TreeProvider;

pub use crate::app::commands::install::{InstallOutcome, InstalledRules};
pub use crate::app::commands::list::{DomainGroup, ListOutcome};
pub use crate::app::commands::update::UpdateOutcome;
pub use crate::domain::{AppError, CatalogSource, LocalSourceConfig, RemoteSourceConfig};

type TerminalContext =
    AppContext<Box<dyn TreeProvider>, DialoguerPrompt, FilesystemProjectStore, SpinnerProgress>;

/// Open the tree backend selected by `source`.
pub fn open_tree(source: &CatalogSource) -> Result<Box<dyn TreeProvider>, AppError> {
    Ok(match source {
        CatalogSource::Remote(config) => Box::new(GitHubTreeProvider::new(config.clone())?),
        CatalogSource::Local(config) => Box::new(FilesystemTreeProvider::new(config.clone())),
    })
}

/// Create an `AppContext` for a project root and catalog source.
fn create_context(
    project_root: PathBuf,
    source: &CatalogSource,
) -> Result<TerminalContext, AppError> {
    let tree = open_tree(source)?;
    let project = FilesystemProjectStore::new(project_root);
    Ok(AppContext::new(tree, DialoguerPrompt, project, SpinnerProgress::new()))
}

/// Interactively install a rule set into the current directory.
pub fn install(source: &CatalogSource) -> Result<InstallOutcome, AppError> {
    install_at(std::env::current_dir()?, source)
}

/// Interactively install a rule set into the project at `path`.
pub fn install_at(
    path: impl Into<PathBuf>,
    source: &CatalogSource,
) -> Result<InstallOutcome, AppError> {
    let ctx = create_context(path.into(), source)?;
    install::execute(&ctx)
}

/// Interactively replace the rule set installed in the current directory.
pub fn update(source: &CatalogSource) -> Result<UpdateOutcome, AppError> {
    update_at(std::env::current_dir()?, source)
}

/// Interactively replace the rule set installed in the project at `path`.
pub fn update_at(
    path: impl Into<PathBuf>,
    source: &CatalogSource,
) -> Result<UpdateOutcome, AppError> {
    let ctx = create_context(path.into(), source)?;
    update::execute(&ctx)
}

/// List every rule set available from `source`.
pub fn list(source: &CatalogSource) -> Result<ListOutcome, AppError> {
    let ctx = create_context(std::env::current_dir()?, source)?;
    list::execute(&ctx)
}
