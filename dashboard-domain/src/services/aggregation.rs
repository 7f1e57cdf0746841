use serde::{Deserialize, Serialize};

use crate::entities::AnomalyRecord;
use crate::value_objects::AverageBasis;

/// KPI values over the full record set. Recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total: usize,
    pub high_risk_count: usize,
    /// `None` when there are no records to average.
    pub average_value: Option<f64>,
    pub average_basis: AverageBasis,
}

impl DashboardMetrics {
    pub fn compute(records: &[AnomalyRecord], basis: AverageBasis) -> Self {
        let total = records.len();
        let high_risk_count = records.iter().filter(|record| record.is_high_risk()).count();
        Self {
            total,
            high_risk_count,
            average_value: mean(records.iter().map(|record| record.value_for(basis))),
            average_basis: basis,
        }
    }
}

// Sum divided by count. A set where every value is v averages to exactly v.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut first = None;
    let mut uniform = true;
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        match first {
            None => first = Some(value),
            Some(head) => uniform &= value == head,
        }
        sum += value;
        count += 1;
    }
    let head = first?;
    if uniform {
        return Some(head);
    }
    Some(sum / count as f64)
}
