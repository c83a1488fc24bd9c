//! prospect-agent - CLI Entry Point
//!
//! Dispatches one task and prints the result to stdout.

use clap::Parser;
use prospect_agent::{cli::Cli, config::Config, Agent};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    prospect_agent::init_tracing();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: model={}, search_key={}",
        config.huggingface_api_url,
        if config.serpapi_api_key.is_some() { "set" } else { "unset" }
    );

    let agent = Agent::from_config(&config)?;
    let output = agent.run(cli.into_request()).await?;

    println!("{}", output);

    Ok(())
}
