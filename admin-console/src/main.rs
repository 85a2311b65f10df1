use admin_console::config::get_configuration;
use admin_console::services::InvoiceApiClient;
use admin_console::startup::build_router;
use admin_console::AppState;
use admin_core::observability::{init_metrics, init_tracing};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "admin-console",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    )?;

    let invoice_client = InvoiceApiClient::new(configuration.invoice_api.clone())?;
    info!(base_url = %invoice_client.base_url(), "Invoice API client ready");

    let metrics_handle = init_metrics()?;

    let state = AppState::new(Arc::new(invoice_client), configuration.capabilities())
        .with_metrics(metrics_handle);
    let app = build_router(state);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting admin-console on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
