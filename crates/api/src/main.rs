use std::sync::Arc;

use anyhow::Context;

use orderflow_api::app::{self, services::AppServices};
use orderflow_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orderflow_observability::init();

    let config = Config::from_env()?;
    let services = Arc::new(AppServices::from_config(&config).context("failed to load inventory catalog")?);
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
