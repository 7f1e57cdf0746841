use std::sync::Arc;

use dashboard_domain::ports::AnomalyRepository;
use dashboard_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub anomaly_repo: Arc<dyn AnomalyRepository>,
    pub metrics: Arc<Metrics>,
}
