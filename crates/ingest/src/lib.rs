pub mod document;
pub mod reader;

pub use document::Document;
pub use reader::FileReader;

use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Character budget used when the whole corpus is pasted into a prompt
pub const DEFAULT_CHAR_BUDGET: usize = 7000;

/// Load every `*.txt` document in `dir`, in file-name order.
///
/// An existing but empty directory yields an empty list; callers decide
/// whether that is fatal.
pub async fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    let documents = FileReader::read_directory(dir).await?;

    info!(
        dir = %dir.display(),
        documents = documents.len(),
        "Documents loaded"
    );

    Ok(documents)
}

/// Join texts with a blank line and keep at most `char_budget` characters.
pub fn concatenate<'a, I>(texts: I, char_budget: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = texts.into_iter().collect::<Vec<_>>().join("\n\n");
    truncate_chars(&joined, char_budget)
}

/// Cut `text` to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
