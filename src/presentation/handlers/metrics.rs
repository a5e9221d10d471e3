use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::presentation::state::AppResources;

/// Prometheus text exposition of the process metrics.
pub async fn metrics_handler(State(resources): State<AppResources>) -> impl IntoResponse {
    let handle = resources.metrics();
    handle.run_upkeep();

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}
