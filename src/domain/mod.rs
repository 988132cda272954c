pub mod catalog;
mod entry;
mod error;
mod rule_set;
mod source_config;

pub use entry::{Entry, EntryKind};
pub use error::AppError;
pub use rule_set::{LevelOption, ResolvedRuleSet, RuleSetDescriptor};
pub use source_config::{
    CatalogSource, ENV_API_URL, ENV_BRANCH, ENV_LOCAL_ROOT, ENV_RAW_URL, LocalSourceConfig,
    RemoteSourceConfig,
};
