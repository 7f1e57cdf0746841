use tracing::warn;

use crate::AppError;
use crate::AppState;

pub async fn check_ready(state: &AppState) -> Result<(), AppError> {
    state.anomaly_repo.ping().await.map_err(|err| {
        warn!("anomaly source not ready: {}", err);
        AppError::Internal(err)
    })
}
