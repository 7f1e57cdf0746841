use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use dashboard_application::dtos::DashboardView;
use dashboard_application::queries::dashboard_queries;
use dashboard_application::AppState;
use dashboard_domain::{AnomalyRecord, DashboardMetrics};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_anomalies(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AnomalyRecord>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    state.metrics.record_api_request();
    let records = dashboard_queries::list_anomalies(&state).await?;
    Ok(Json(records))
}

pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardMetrics>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    state.metrics.record_api_request();
    let summary = dashboard_queries::get_summary(&state).await?;
    Ok(Json(summary))
}

pub async fn get_dashboard_view(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardView>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    state.metrics.record_api_request();
    let view = dashboard_queries::build_dashboard_view(&state).await?;
    Ok(Json(view))
}
