mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = sift_config::Config::load()?;

    match cli.command {
        cli::Commands::List(args) => commands::list::handle(args, &config).await,
        cli::Commands::Interactive => commands::interactive::handle(&config).await,
        cli::Commands::Filters(cmd) => commands::filters::handle(cmd, &config).await,
    }
}
