//! prompt-charter: discover curated AI coding rule sets and install them into a project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CatalogSource, DomainGroup, InstallOutcome, InstalledRules, ListOutcome, LocalSourceConfig,
    RemoteSourceConfig, UpdateOutcome, install, install_at, list, update, update_at,
};
pub use domain::AppError;
