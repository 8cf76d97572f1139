use anyhow::{Context, Result};
use query::{GeminiClient, OfflineAssembler, OnlineAssembler, TavilyClient};
use tracing::info;

use crate::config::{AppConfig, OperationMode};

/// Answer one question with the collaborators described by `config`.
pub async fn answer(config: &AppConfig, question: &str) -> Result<String> {
    let generator = GeminiClient::new(config.generation.settings())?;

    info!(mode = ?config.mode, model = %generator.model(), "Answering question");

    match config.mode {
        OperationMode::Offline => {
            let documents = ingest::load_documents(&config.data_dir)
                .await
                .with_context(|| {
                    format!(
                        "Offline mode needs documents in {:?}; run fetch-docs first",
                        config.data_dir
                    )
                })?;

            let assembler = OfflineAssembler::new(
                generator,
                documents,
                config.retrieval.strategy(),
                config.retrieval.char_budget,
            )
            .with_context(|| format!("Cannot answer offline from {:?}", config.data_dir))?;

            assembler.answer(question).await
        }
        OperationMode::Online => {
            let search = TavilyClient::new(config.search.settings())?;
            if !search.is_enabled() {
                info!("No search credential, online answers use model knowledge only");
            }

            OnlineAssembler::new(generator, search)
                .with_max_results(config.search.max_results)
                .answer(question)
                .await
        }
    }
}
