use std::sync::Arc;

use anyhow::Context;

use catalog_api::app::{self, services::AppServices};
use catalog_infra::CatalogConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = CatalogConfig::from_env().context("loading configuration")?;
    let services = AppServices::from_config(&config)
        .await
        .context("opening catalog store")?;

    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, store = ?config.store, "listening");

    axum::serve(listener, app).await.context("http server stopped")?;
    Ok(())
}
