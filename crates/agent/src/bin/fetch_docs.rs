use agent::fetch::{default_sources, DocFetcher};
use agent::logging;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "fetch-docs")]
#[command(about = "Download LangGraph and LangChain documentation for offline mode", long_about = None)]
struct Args {
    /// Where to save the *.txt files
    #[arg(long, env = "DOCS_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Process environment wins over .env entries.
    dotenvy::dotenv().ok();
    logging::init();
    let args = Args::parse();

    let fetcher = DocFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let written = fetcher.fetch_all(&default_sources(), &args.data_dir).await?;

    for path in &written {
        println!("Saved {}", path.display());
    }
    println!("Local docs are ready for offline mode.");

    Ok(())
}
