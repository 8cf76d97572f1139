pub mod llm;
pub mod offline;
pub mod online;
pub mod prompt;
pub mod ranker;
pub mod retry;
pub mod web_search;

pub use llm::{GeminiClient, GenerationError, GenerationSettings, TextGenerator, NO_RESPONSE};
pub use offline::{ContextStrategy, OfflineAssembler, DEFAULT_TOP_K};
pub use online::OnlineAssembler;
pub use ranker::{rank, search, Ranker, ScoredDocument};
pub use retry::{RetryPolicy, Retryable};
pub use web_search::{SearchHit, SearchSettings, TavilyClient, WebContext, WebSearch};
