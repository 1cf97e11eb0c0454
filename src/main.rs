use std::error::Error;

use ai_llm_service::{LlmService, config::default_config::config_from_env, telemetry};
use api::{ApiConfig, AppError};
use contextor::DocumentQueryService;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; the process environment may already be set.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter("info"))
        .with(telemetry::layer())
        .try_init()?;

    if let Err(err) = &dotenv {
        info!(reason = %err, "no .env file loaded");
    }

    if let Err(err) = run().await {
        error!(error = %err, "hackrx backend stopped with an error");
        return Err(err);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn Error>> {
    let api_config = ApiConfig::from_env().map_err(AppError::from)?;
    let llm = LlmService::new(config_from_env()?)?;
    info!(
        provider = %llm.config().provider,
        model = %llm.config().model,
        "llm backend configured"
    );

    let service = DocumentQueryService::with_generator(llm);

    api::start(api_config, service).await?;
    Ok(())
}
