use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::info;

/// A documentation dump to download
#[derive(Debug, Clone)]
pub struct DocSource {
    pub file_name: String,
    pub url: String,
}

impl DocSource {
    pub fn new(file_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
        }
    }
}

/// The LangGraph and LangChain `llms.txt` dumps used by offline mode
pub fn default_sources() -> Vec<DocSource> {
    vec![
        DocSource::new(
            "langgraph_llms.txt",
            "https://langchain-ai.github.io/langgraph/llms.txt",
        ),
        DocSource::new(
            "langgraph_llms_full.txt",
            "https://langchain-ai.github.io/langgraph/llms-full.txt",
        ),
        DocSource::new("langchain_llms.txt", "https://python.langchain.com/llms.txt"),
    ]
}

pub struct DocFetcher {
    client: reqwest::Client,
}

impl DocFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build download HTTP client")?;
        Ok(Self { client })
    }

    /// Download each source into `dir`, stopping at the first failure.
    /// Returns the written paths in source order.
    pub async fn fetch_all(&self, sources: &[DocSource], dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .await
            .context(format!("Failed to create documents directory: {:?}", dir))?;

        let mut written = Vec::with_capacity(sources.len());

        for source in sources {
            info!(file = %source.file_name, url = %source.url, "Downloading documentation");

            let response = self
                .client
                .get(&source.url)
                .send()
                .await
                .context(format!("Failed to download {}", source.url))?;

            if !response.status().is_success() {
                anyhow::bail!("Download of {} failed: {}", source.url, response.status());
            }

            let body = response
                .text()
                .await
                .context(format!("Failed to read body of {}", source.url))?;

            let path = dir.join(&source.file_name);
            fs::write(&path, body)
                .await
                .context(format!("Failed to write {:?}", path))?;

            written.push(path);
        }

        Ok(written)
    }
}
