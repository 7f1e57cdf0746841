use std::sync::Arc;

use async_trait::async_trait;

use dashboard_domain::{AnomalyRecord, AnomalyRepository};

use crate::sample_anomalies;

/// Fixed record set shared by every request. Nothing can add, remove or
/// reorder records after construction.
#[derive(Clone)]
pub struct InMemoryAnomalyRepository {
    records: Arc<[AnomalyRecord]>,
}

impl InMemoryAnomalyRepository {
    pub fn new(records: Vec<AnomalyRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(sample_anomalies())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl AnomalyRepository for InMemoryAnomalyRepository {
    async fn list_anomalies(&self) -> anyhow::Result<Vec<AnomalyRecord>> {
        Ok(self.records.to_vec())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_domain::{AverageBasis, DashboardMetrics};

    #[tokio::test]
    async fn builtin_set_keeps_definition_order() {
        let repo = InMemoryAnomalyRepository::builtin();
        let ids: Vec<_> = repo
            .list_anomalies()
            .await
            .expect("records")
            .into_iter()
            .map(|record| record.transaction_id.0)
            .collect();
        assert_eq!(
            ids,
            ["tx_1A2B3C4D", "tx_9Z8Y7X6W", "tx_5P6Q7R8S", "tx_7L8M9N0O"]
        );
        assert_eq!(repo.len(), 4);
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let repo = InMemoryAnomalyRepository::builtin();
        let first = repo.list_anomalies().await.expect("records");
        let second = repo.list_anomalies().await.expect("records");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn builtin_set_average_score_is_sum_over_total() {
        let records = InMemoryAnomalyRepository::builtin()
            .list_anomalies()
            .await
            .expect("records");
        let metrics = DashboardMetrics::compute(&records, AverageBasis::Score);
        let expected =
            records.iter().map(|record| record.score).sum::<f64>() / records.len() as f64;
        assert_eq!(metrics.average_value, Some(expected));
        assert_eq!(metrics.average_value, Some(0.87));
        assert_eq!(metrics.high_risk_count, 2);
    }
}
