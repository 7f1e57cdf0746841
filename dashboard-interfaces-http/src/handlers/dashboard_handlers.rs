use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse};

use dashboard_application::queries::dashboard_queries;
use dashboard_application::AppState;

use crate::error::HttpError;
use crate::views::{render_dashboard, StylesheetMode, DASHBOARD_CSS};

pub async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let view = dashboard_queries::build_dashboard_view(&state).await?;
    state.metrics.record_render();
    Ok(Html(render_dashboard(&view, StylesheetMode::Linked)))
}

pub async fn dashboard_stylesheet() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/css; charset=utf-8"),
        )],
        DASHBOARD_CSS,
    )
}

pub async fn not_found() -> HttpError {
    HttpError::NotFound
}
