use serde_json::Value;
use thiserror::Error;

use crate::model::status;
use crate::model::work_item::{FetchResult, WorkItem};

pub const DEFAULT_ENDPOINT_PATH: &str = "/api/execution-items";

#[cfg(test)]
pub mod tests;

/// Where the execution-items endpoint lives. Passed in explicitly so tests
/// can point a fetcher at a local server without touching global state.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub endpoint_path: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
        }
    }
}

impl FetchConfig {
    fn resolve_url(&self) -> Result<String, FetchError> {
        if self.base_url.trim().is_empty() {
            return Err(FetchError::Configuration);
        }
        let url = format!("{}{}", self.base_url.trim(), self.endpoint_path.trim());
        if url.is_empty() {
            return Err(FetchError::Configuration);
        }
        Ok(url)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API endpoint configured; set base_url and endpoint_path under [api] in the config file")]
    Configuration,
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {code} {text}")]
    HttpStatus { code: u16, text: String },
    #[error("invalid response: {0}")]
    Validation(String),
}

/// Fetches the roadmap item list and holds the observable fetch state.
///
/// Errors never escape `load`: every failure kind is converted into the
/// `error` string and clears `items`, so consumers observe state instead of
/// handling exceptions. `load` takes `&mut self`, which means a second load
/// cannot start while one is in flight on the same fetcher; the exclusive
/// borrow serializes overlapping calls instead of letting them race.
pub struct RoadmapFetcher {
    config: FetchConfig,
    client: reqwest::Client,
    items: Vec<WorkItem>,
    total: u64,
    pagination: Option<(u64, u64)>,
    loading: bool,
    error: Option<String>,
}

impl RoadmapFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            items: Vec::new(),
            total: 0,
            pagination: None,
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn pagination(&self) -> Option<(u64, u64)> {
        self.pagination
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.fetch_items().await {
            Ok(result) => {
                self.total = result.total;
                self.pagination = result.pagination();
                // Route every item through the classifier even while it is a
                // pass-through, so derived status rules take effect here later.
                self.items = result
                    .items
                    .into_iter()
                    .map(|mut item| {
                        item.health_status = status::classify(&item);
                        item
                    })
                    .collect();
            }
            Err(e) => {
                // Failures discard previously loaded data; no stale rows
                // survive a failed fetch.
                self.items = Vec::new();
                self.total = 0;
                self.pagination = None;
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    pub async fn refetch(&mut self) {
        self.load().await;
    }

    async fn fetch_items(&self) -> Result<FetchResult, FetchError> {
        let url = self.config.resolve_url()?;

        let resp = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
                text: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let body: Value = resp.json().await?;
        let raw_items = match body.get("items") {
            Some(Value::Array(raw)) => raw,
            Some(_) => {
                return Err(FetchError::Validation(
                    "`items` field is not an array".to_string(),
                ))
            }
            None => {
                return Err(FetchError::Validation(
                    "response is missing the `items` field".to_string(),
                ))
            }
        };

        // Check status strings up front so a bad value names itself instead
        // of surfacing as a generic deserialization error.
        for raw in raw_items {
            if let Some(Value::String(value)) = raw.get("healthStatus") {
                if !status::is_valid_status(value) {
                    return Err(FetchError::Validation(format!(
                        "unknown healthStatus value `{value}`"
                    )));
                }
            }
        }

        serde_json::from_value(body)
            .map_err(|e| FetchError::Validation(format!("malformed `items` entry: {e}")))
    }
}
