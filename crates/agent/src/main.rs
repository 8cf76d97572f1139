use agent::{answer, logging, AppConfig, Cli, ConfigError};
use anyhow::Result;
use clap::{error::ErrorKind, CommandFactory, Parser};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Process environment wins over .env entries.
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let config = match AppConfig::from_env(&cli.overrides()) {
        Ok(config) => config,
        Err(e @ ConfigError::MissingMode) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit(),
        Err(e @ ConfigError::InvalidMode(_)) => {
            Cli::command().error(ErrorKind::InvalidValue, e).exit()
        }
        Err(e) => return Err(e.into()),
    };

    let response = answer(&config, &cli.query).await?;
    println!("{}", response);

    Ok(())
}
