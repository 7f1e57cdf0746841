use async_trait::async_trait;

use crate::entities::AnomalyRecord;

/// Source of the record set shown on the dashboard. Implementations return
/// the same records, in the same order, for the lifetime of the process.
#[async_trait]
pub trait AnomalyRepository: Send + Sync {
    async fn list_anomalies(&self) -> anyhow::Result<Vec<AnomalyRecord>>;
    async fn ping(&self) -> anyhow::Result<()>;
}
