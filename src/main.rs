use anyhow::Context;
use template_api::bootstrap;
use template_api::config::AppConfig;
use template_api::observability::init_tracing;
use tracing::error;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load application configuration")?;

    init_tracing(&config.logging);

    if let Err(err) = bootstrap::run(config).await {
        let err = anyhow::Error::from(err);
        error!(error = format!("{err:#}"), "application startup failed");
        return Err(err);
    }

    Ok(())
}
