use catalog_service::config::CatalogConfig;
use catalog_service::services::metrics;
use catalog_service::startup::Application;
use service_core::observability::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), service_core::error::AppError> {
    // Load configuration - fail fast if invalid
    let config = CatalogConfig::load()?;

    init_tracing(
        "catalog-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    metrics::init_metrics();

    tracing::info!(
        port = config.common.port,
        backend = ?config.store.backend,
        "Starting catalog service"
    );

    let app = Application::build(config).await?;

    tracing::info!(port = app.port(), "Catalog service ready");

    app.run_until_stopped().await?;
    Ok(())
}
