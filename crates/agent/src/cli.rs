use clap::Parser;
use std::path::PathBuf;

use crate::config::{ContextMode, OperationMode, Overrides};

#[derive(Debug, Parser)]
#[command(name = "docs-agent")]
#[command(about = "Answer questions about LangGraph and LangChain from local docs or the web", long_about = None)]
pub struct Cli {
    /// Operation mode; falls back to AGENT_MODE when omitted
    #[arg(long, value_enum)]
    pub mode: Option<OperationMode>,

    /// Directory holding the *.txt documentation (default: DOCS_DIR or ./data)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Number of documents handed to the model in ranked offline mode
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub top_k: Option<u64>,

    /// How offline context is chosen
    #[arg(long, value_enum)]
    pub context: Option<ContextMode>,

    /// Character budget for the offline documentation block
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// The question to answer
    pub query: String,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            data_dir: self.data_dir.clone(),
            top_k: self.top_k.map(|k| k as usize),
            context: self.context,
            char_budget: self.max_chars,
        }
    }
}
