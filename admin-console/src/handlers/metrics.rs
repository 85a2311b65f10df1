use crate::AppState;
use admin_core::observability::render_metrics;
use axum::{extract::State, response::IntoResponse};

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    render_metrics(state.metrics.as_ref())
}
