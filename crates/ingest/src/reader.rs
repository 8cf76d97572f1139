use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::document::Document;

pub struct FileReader;

impl FileReader {
    /// Read a single `.txt` file. Invalid UTF-8 is replaced, never rejected.
    pub async fn read_file(path: &Path) -> Result<Document> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        if extension != "txt" {
            anyhow::bail!("Unsupported file format: {:?}", path);
        }

        let bytes = fs::read(path)
            .await
            .context(format!("Failed to read file: {:?}", path))?;

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Document::new(source, String::from_utf8_lossy(&bytes)))
    }

    /// Read every `*.txt` file directly inside `dir`, sorted by file name.
    pub async fn read_directory(dir: &Path) -> Result<Vec<Document>> {
        let mut paths = Vec::new();

        let mut entries = fs::read_dir(dir)
            .await
            .context(format!("Failed to read documents directory: {:?}", dir))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if !entry.file_type().await?.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                paths.push(path);
            }
        }

        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let document = Self::read_file(&path).await?;
            debug!(source = %document.source, chars = document.char_len(), "Loaded document");
            documents.push(document);
        }

        Ok(documents)
    }
}
