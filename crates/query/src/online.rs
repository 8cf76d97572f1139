use anyhow::Result;
use tracing::info;

use crate::llm::TextGenerator;
use crate::prompt::{build_online_prompt, SEARCH_TOPIC_PREFIX};
use crate::web_search::{WebContext, WebSearch, DEFAULT_MAX_RESULTS};

/// Answers from web search results plus the model's own knowledge.
pub struct OnlineAssembler<G, S> {
    generator: G,
    search: S,
    max_results: usize,
}

impl<G: TextGenerator, S: WebSearch> OnlineAssembler<G, S> {
    pub fn new(generator: G, search: S) -> Self {
        Self {
            generator,
            search,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub async fn web_context(&self, question: &str) -> WebContext {
        let query = format!("{}{}", SEARCH_TOPIC_PREFIX, question);
        self.search.search(&query, self.max_results).await
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        let context = self.web_context(question).await;

        if let WebContext::Unavailable { reason } = &context {
            info!(reason = %reason, "Answering without web context");
        }

        let rendered = context.render();
        let prompt = build_online_prompt(question, rendered.as_deref());
        self.generator.generate(&prompt).await
    }
}
