//! prospect-eval - scores live agent output with the evaluation scorers.
//!
//! Needs the same environment as `prospect-agent`, including `SERPAPI_API_KEY`.

use prospect_agent::{config::Config, evaluation, Agent};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    prospect_agent::init_tracing();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    let agent = Agent::from_config(&config)?;

    let report = evaluation::evaluate(&agent).await?;
    println!("{}", report);

    Ok(())
}
