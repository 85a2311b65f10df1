pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod views;

use metrics_exporter_prometheus::PrometheusHandle;
use models::Capabilities;
use services::InvoiceGateway;
use std::sync::Arc;

/// Shared application state: the remote invoice client, the operator's
/// granted capabilities and the Prometheus handle behind `/metrics`.
#[derive(Clone)]
pub struct AppState {
    pub invoice_gateway: Arc<dyn InvoiceGateway>,
    pub capabilities: Capabilities,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(invoice_gateway: Arc<dyn InvoiceGateway>, capabilities: Capabilities) -> Self {
        Self {
            invoice_gateway,
            capabilities,
            metrics: None,
        }
    }

    pub fn with_metrics(self, handle: PrometheusHandle) -> Self {
        Self {
            metrics: Some(handle),
            ..self
        }
    }
}
