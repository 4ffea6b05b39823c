use anyhow::Result;

use blinkstake_api::ApiServer;
use blinkstake_common::ServiceConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        "Loaded configuration: {:?} environment, staking with validator {}",
        config.environment,
        config.environment.validator_vote_account()
    );

    ApiServer::new(config).start().await
}
