// Anomaly entity
// One flagged transaction as listed on the dashboard

use serde::{Deserialize, Serialize};

use crate::value_objects::{AverageBasis, RiskLevel, TransactionId};

/// Immutable once loaded. Field names on the wire are camelCase so fixture
/// files can reuse the mock data verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnomalyRecord {
    pub transaction_id: TransactionId,
    pub amount: f64,
    pub currency: String,
    pub country: String,
    pub merchant: String,
    pub score: f64,
    pub risk_level: RiskLevel,
    pub timestamp: String,
}

impl AnomalyRecord {
    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }

    pub fn value_for(&self, basis: AverageBasis) -> f64 {
        match basis {
            AverageBasis::Score => self.score,
            AverageBasis::Amount => self.amount,
        }
    }
}
