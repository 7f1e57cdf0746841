use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use tokio::time::timeout;
use tracing::error;

use dashboard_application::queries::health_queries;
use dashboard_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(serde::Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

pub async fn health_live() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub async fn health_ready(State(state): State<AppState>) -> Result<Json<HealthStatus>, HttpError> {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    match timeout(Duration::from_secs(timeout_secs), health_queries::check_ready(&state)).await {
        Ok(Ok(())) => Ok(Json(HealthStatus { status: "ready" })),
        Ok(Err(err)) => {
            error!("ready check failed: {}", err);
            Err(HttpError::Unavailable(format!(
                "anomaly source unavailable: {}",
                err
            )))
        }
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            Err(HttpError::Unavailable(format!(
                "ready check timed out after {}s",
                timeout_secs
            )))
        }
    }
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        state.metrics.render_prometheus(),
    ))
}
