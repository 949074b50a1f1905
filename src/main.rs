use anyhow::{Context, Result};
use api_client::SubgraphClient;
use clap::Parser;
use configuration::ConfigArgs;
use engine::PaginationDriver;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Finds the Uniswap v3 pool with the largest summed daily fee/TVL ratio over a date window.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

/// The main entry point for the poolrank application.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the result.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the tracing subscriber: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config.load().context("Failed to load configuration")?;
    tracing::info!(endpoint = %config.api.endpoint, "Configuration loaded.");

    let client = SubgraphClient::new(&config.api).context("Failed to build the HTTP client")?;
    let driver = PaginationDriver::from_config(Arc::new(client), &config)?;

    let report = driver.run().await.context("Pagination aborted")?;

    println!("{}", report.best_entity_id);
    println!("{}", report.best_value);
    Ok(())
}
