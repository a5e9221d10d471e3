use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::presentation::state::AppResources;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub backends: BackendsResponse,
    pub resources: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct BackendsResponse {
    pub generation: &'static str,
    pub embedding: &'static str,
    pub vectordb: &'static str,
}

/// Reports whether the vector database is still connected, plus which
/// backends were selected at startup.
pub async fn health_handler(State(resources): State<AppResources>) -> impl IntoResponse {
    let connected = resources.vectordb_client().is_connected().await;

    let (status_code, status) = if connected {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            started_at: resources.started_at(),
            backends: BackendsResponse {
                generation: resources.generation_client().backend_name(),
                embedding: resources.embedding_client().backend_name(),
                vectordb: resources.vectordb_client().backend_name(),
            },
            resources: AppResources::KEYS.to_vec(),
        }),
    )
}
