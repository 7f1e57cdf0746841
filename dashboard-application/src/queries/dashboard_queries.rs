use tracing::{debug, error};

use dashboard_domain::{AnomalyRecord, DashboardMetrics};

use crate::dtos::{DashboardSnapshot, DashboardView};
use crate::presenter;
use crate::AppError;
use crate::AppState;

pub async fn load_dashboard(state: &AppState) -> Result<DashboardSnapshot, AppError> {
    let records = fetch_records(state).await?;
    let metrics = DashboardMetrics::compute(&records, state.config.dashboard.average_basis);
    debug!(
        total = metrics.total,
        high_risk = metrics.high_risk_count,
        basis = %metrics.average_basis,
        "dashboard metrics computed"
    );
    Ok(DashboardSnapshot { records, metrics })
}

pub async fn build_dashboard_view(state: &AppState) -> Result<DashboardView, AppError> {
    let snapshot = load_dashboard(state).await?;
    Ok(presenter::build_dashboard_view(
        &state.config.dashboard,
        &snapshot,
    ))
}

pub async fn list_anomalies(state: &AppState) -> Result<Vec<AnomalyRecord>, AppError> {
    fetch_records(state).await
}

pub async fn get_summary(state: &AppState) -> Result<DashboardMetrics, AppError> {
    Ok(load_dashboard(state).await?.metrics)
}

async fn fetch_records(state: &AppState) -> Result<Vec<AnomalyRecord>, AppError> {
    state.anomaly_repo.list_anomalies().await.map_err(|err| {
        state.metrics.record_source_error();
        error!("failed to load anomaly records: {}", err);
        AppError::Internal(err)
    })
}
