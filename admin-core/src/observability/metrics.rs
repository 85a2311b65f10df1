use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the process-wide Prometheus recorder.
///
/// Fails when a recorder is already installed.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))
}

/// Prometheus text exposition, or a comment line when no recorder is wired.
pub fn render_metrics(handle: Option<&PrometheusHandle>) -> String {
    handle
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}
