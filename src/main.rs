use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod config;
mod terminal;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_env_and_args();

    // Initialize tracing on stderr so answers on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    cli.run().await?;

    Ok(())
}
