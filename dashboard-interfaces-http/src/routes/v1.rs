use axum::routing::get;
use axum::Router;

use dashboard_application::AppState;

use crate::handlers::{dashboard_handlers, ops_handlers, query_handlers};
use crate::views::STYLESHEET_PATH;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_handlers::dashboard_page))
        .route(STYLESHEET_PATH, get(dashboard_handlers::dashboard_stylesheet))
        .route(
            "/v1/dashboard/anomalies",
            get(query_handlers::list_anomalies),
        )
        .route("/v1/dashboard/summary", get(query_handlers::get_summary))
        .route("/v1/dashboard/view", get(query_handlers::get_dashboard_view))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .fallback(dashboard_handlers::not_found)
        .with_state(state)
}
