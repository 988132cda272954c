//! GitHub-hosted catalog backend using reqwest.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, Entry, EntryKind, RemoteSourceConfig};
use crate::ports::TreeProvider;

const GITHUB_JSON: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = "prompt-charter-cli";

/// Catalog tree served by the GitHub contents API and raw-content host.
///
/// One request per call: no caching, retry, or authentication.
#[derive(Debug, Clone)]
pub struct GitHubTreeProvider {
    config: RemoteSourceConfig,
    client: Client,
}

impl GitHubTreeProvider {
    pub fn new(config: RemoteSourceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn contents_url(&self, path: &str) -> Result<Url, AppError> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("API URL cannot be a base: {}", self.config.api_url))
            })?
            .pop_if_empty()
            .extend(["repos", self.config.owner.as_str(), self.config.repo.as_str(), "contents"])
            .extend(path_segments(path));
        url.query_pairs_mut().append_pair("ref", &self.config.branch);
        Ok(url)
    }

    fn raw_url(&self, path: &str) -> Result<Url, AppError> {
        let mut url = self.config.raw_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Raw URL cannot be a base: {}", self.config.raw_url))
            })?
            .pop_if_empty()
            .extend([self.config.owner.as_str(), self.config.repo.as_str()])
            .extend(path_segments(&self.config.branch))
            .extend(path_segments(path));
        Ok(url)
    }
}

impl TreeProvider for GitHubTreeProvider {
    fn list_children(&self, path: &str) -> Result<Vec<Entry>, AppError> {
        let url = self.contents_url(path)?;
        debug!(%url, "listing remote directory");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .map_err(|e| {
                AppError::fetch(path, format!("Failed to fetch directory contents: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(path, "remote directory not found; treating as empty");
            return Ok(Vec::new());
        }

        let body = response.text().map_err(|e| {
            AppError::fetch(path, format!("Failed to read directory contents: {}", e))
        })?;

        if !status.is_success() {
            return Err(AppError::fetch(
                path,
                format!("Failed to fetch directory contents: {}", describe_failure(status, &body)),
            ));
        }

        let items: Vec<ContentItem> = serde_json::from_str(&body).map_err(|e| {
            AppError::fetch(path, format!("Unexpected directory listing response: {}", e))
        })?;

        Ok(items.into_iter().filter_map(ContentItem::into_entry).collect())
    }

    fn fetch_file(&self, path: &str) -> Result<String, AppError> {
        let url = self.raw_url(path)?;
        debug!(%url, "fetching remote file");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::fetch(path, format!("Failed to fetch file content: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AppError::fetch(path, format!("Failed to read file content: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::fetch(
                path,
                format!("Failed to fetch file content: {}", describe_failure(status, &body)),
            ));
        }

        Ok(body)
    }
}

/// One element of a contents-API directory listing.
#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    path: String,
}

impl ContentItem {
    fn into_entry(self) -> Option<Entry> {
        let Some(kind) = EntryKind::from_tag(&self.kind) else {
            debug!(path = %self.path, kind = %self.kind, "skipping unsupported entry type");
            return None;
        };
        Some(Entry { name: self.name, kind, path: self.path })
    }
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    match extract_error_message(body) {
        Some(message) => format!("HTTP {}: {}", status, message),
        None => format!("HTTP {}", status),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
