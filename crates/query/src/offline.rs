use anyhow::Result;
use index::IndexError;
use ingest::{concatenate, Document};
use tracing::info;

use crate::llm::TextGenerator;
use crate::prompt::build_offline_prompt;
use crate::ranker::Ranker;

/// Default number of documents the ranker hands to the model
pub const DEFAULT_TOP_K: usize = 3;

/// How the offline context block is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextStrategy {
    /// Best `top_k` documents by similarity to the question
    Ranked { top_k: usize },
    /// Every document, in load order
    Full,
}

impl Default for ContextStrategy {
    fn default() -> Self {
        Self::Ranked { top_k: DEFAULT_TOP_K }
    }
}

enum Corpus {
    Ranked { ranker: Ranker, top_k: usize },
    Full { documents: Vec<Document> },
}

/// Answers from local documents only.
pub struct OfflineAssembler<G> {
    generator: G,
    corpus: Corpus,
    char_budget: usize,
}

impl<G: TextGenerator> OfflineAssembler<G> {
    /// Fails with [`IndexError::Configuration`] when `documents` is empty,
    /// whichever strategy is chosen.
    pub fn new(
        generator: G,
        documents: Vec<Document>,
        strategy: ContextStrategy,
        char_budget: usize,
    ) -> Result<Self, IndexError> {
        if documents.is_empty() {
            return Err(IndexError::Configuration(
                "no .txt documents found for offline mode".to_string(),
            ));
        }

        let corpus = match strategy {
            ContextStrategy::Ranked { top_k } => Corpus::Ranked {
                ranker: Ranker::from_documents(documents)?,
                top_k,
            },
            ContextStrategy::Full => Corpus::Full { documents },
        };

        Ok(Self {
            generator,
            corpus,
            char_budget,
        })
    }

    /// Documentation block that will be pasted into the prompt
    pub fn context_for(&self, question: &str) -> String {
        match &self.corpus {
            Corpus::Ranked { ranker, top_k } => {
                let hits = ranker.search(question, *top_k);
                info!(
                    selected = hits.len(),
                    sources = ?hits.iter().map(|d| d.source.as_str()).collect::<Vec<_>>(),
                    "Selected offline context"
                );
                concatenate(hits.iter().map(|d| d.text.as_str()), self.char_budget)
            }
            Corpus::Full { documents } => {
                concatenate(documents.iter().map(|d| d.text.as_str()), self.char_budget)
            }
        }
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        let context = self.context_for(question);
        let prompt = build_offline_prompt(question, &context);
        self.generator.generate(&prompt).await
    }
}
