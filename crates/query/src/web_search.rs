use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default number of hits requested from the search service
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Outcome of a best-effort web search. Never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum WebContext {
    Available(Vec<SearchHit>),
    Unavailable { reason: String },
}

impl WebContext {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Hits as `Title/URL/Content` blocks separated by `---` rules
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Available(hits) => Some(
                hits.iter()
                    .map(|hit| {
                        format!(
                            "Title: {}\nURL: {}\nContent: {}",
                            hit.title.as_deref().unwrap_or(""),
                            hit.url.as_deref().unwrap_or(""),
                            hit.content.as_deref().unwrap_or("")
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n---\n\n"),
            ),
            Self::Unavailable { .. } => None,
        }
    }
}

pub trait WebSearch {
    fn search(&self, query: &str, max_results: usize) -> impl Future<Output = WebContext> + Send;
}

#[derive(Clone)]
pub struct SearchSettings {
    /// Absent key disables search entirely
    pub api_key: Option<String>,
    pub base_url: String,
    pub search_depth: String,
    pub timeout: Duration,
}

/// Client for the Tavily `/search` endpoint.
#[derive(Clone)]
pub struct TavilyClient {
    api_key: Option<String>,
    base_url: String,
    search_depth: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
    search_depth: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl TavilyClient {
    pub fn new(settings: SearchSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build web-search HTTP client")?;

        Ok(Self {
            api_key: settings.api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            search_depth: settings.search_depth,
            client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn try_search(&self, api_key: &str, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let url = format!("{}/search", self.base_url);

        let request = SearchRequest {
            api_key,
            query,
            max_results,
            search_depth: &self.search_depth,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send search request")?;

        if !response.status().is_success() {
            anyhow::bail!("Search request failed: {}", response.status());
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;

        Ok(parsed.results)
    }
}

impl WebSearch for TavilyClient {
    async fn search(&self, query: &str, max_results: usize) -> WebContext {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("Web search disabled, no credential configured");
            return WebContext::unavailable("no search credential configured");
        };

        match self.try_search(api_key, query, max_results).await {
            Ok(hits) if hits.is_empty() => WebContext::unavailable("search returned no results"),
            Ok(hits) => {
                info!(hits = hits.len(), "Web search returned context");
                WebContext::Available(hits)
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Web search failed, continuing without it");
                WebContext::unavailable(format!("{:#}", e))
            }
        }
    }
}
