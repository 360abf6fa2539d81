//! Populates the project table with the initial portfolio entries.
//!
//! Safe to re-run: it writes nothing when the table already has rows.

use anyhow::Context;
use dotenv::dotenv;
use portfolio_api::{
    settings::AppConfig,
    shared_repos::SharedRepositories,
    telemetry::init_tracing,
    use_cases::seed::SeedHandler,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::new().context("Failed to load configuration")?;
    let repos = SharedRepositories::connect(&config)
        .await
        .context("Failed to initialise store")?;

    let outcome = SeedHandler::new(repos.project_repo)
        .seed_initial_projects()
        .await
        .context("Error populating projects")?;

    println!("{}", outcome);
    Ok(())
}
