use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use dashboard_application::{AppState, Metrics};
use dashboard_infrastructure::{AppConfig, FixtureFileLoader, InMemoryAnomalyRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path).await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        info!(
            bind_addr = %runtime_config.bind_addr,
            basis = %runtime_config.dashboard.average_basis,
            auth = runtime_config.api_token.is_some(),
            "configuration loaded"
        );

        let repo = match &runtime_config.fixtures_path {
            Some(path) => {
                let records = FixtureFileLoader::new().load(path).await?;
                let repo = InMemoryAnomalyRepository::new(records);
                info!(records = repo.len(), source = %path, "anomaly records loaded");
                repo
            }
            None => {
                let repo = InMemoryAnomalyRepository::builtin();
                info!(records = repo.len(), source = "built-in", "anomaly records loaded");
                repo
            }
        };

        let state = AppState {
            config: runtime_config,
            anomaly_repo: Arc::new(repo),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
