//! Catalog source configuration.

use std::path::PathBuf;

use url::Url;

use super::AppError;

pub const ENV_API_URL: &str = "PROMPT_CHARTER_API_URL";
pub const ENV_RAW_URL: &str = "PROMPT_CHARTER_RAW_URL";
pub const ENV_BRANCH: &str = "PROMPT_CHARTER_BRANCH";
pub const ENV_LOCAL_ROOT: &str = "PROMPT_CHARTER_LOCAL_ROOT";

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";
const DEFAULT_OWNER: &str = "mpklu";
const DEFAULT_REPO: &str = "prompt_charter";
const DEFAULT_BRANCH: &str = "main";

/// Which backend serves the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(RemoteSourceConfig),
    Local(LocalSourceConfig),
}

impl CatalogSource {
    pub fn is_local(&self) -> bool {
        matches!(self, CatalogSource::Local(_))
    }
}

/// Coordinates of the hosted catalog repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSourceConfig {
    /// Base URL of the directory-listing API.
    pub api_url: Url,
    /// Base URL of the raw-content host.
    pub raw_url: Url,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl Default for RemoteSourceConfig {
    fn default() -> Self {
        Self {
            api_url: static_url(DEFAULT_API_URL),
            raw_url: static_url(DEFAULT_RAW_URL),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl RemoteSourceConfig {
    /// Defaults overridden by `PROMPT_CHARTER_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_API_URL) {
            config.api_url = parse_url(ENV_API_URL, &value)?;
        }
        if let Some(value) = lookup(ENV_RAW_URL) {
            config.raw_url = parse_url(ENV_RAW_URL, &value)?;
        }
        if let Some(value) = lookup(ENV_BRANCH).filter(|v| !v.trim().is_empty()) {
            config.branch = value.trim().to_string();
        }
        Ok(config)
    }
}

/// Local mirror of the catalog repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSourceConfig {
    pub root: PathBuf,
}

impl LocalSourceConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the catalog root: explicit flag, then environment, then the current directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, AppError> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }
        if let Some(root) = std::env::var_os(ENV_LOCAL_ROOT).filter(|v| !v.is_empty()) {
            return Ok(Self::new(root));
        }
        Ok(Self::new(std::env::current_dir()?))
    }
}

fn parse_url(key: &str, value: &str) -> Result<Url, AppError> {
    Url::parse(value.trim())
        .map_err(|e| AppError::config_error(format!("Invalid URL in {}: '{}' ({})", key, value, e)))
}

fn static_url(url: &str) -> Url {
    Url::parse(url).expect("static URL is valid")
}
