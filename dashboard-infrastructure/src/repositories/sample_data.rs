use dashboard_domain::{AnomalyRecord, RiskLevel, TransactionId};

/// Built-in mock set, in display order.
pub fn sample_anomalies() -> Vec<AnomalyRecord> {
    vec![
        sample(
            "tx_1A2B3C4D",
            259.99,
            "GB",
            "Online Electronics",
            0.97,
            RiskLevel::High,
            "2025-12-20 14:32:10",
        ),
        sample(
            "tx_9Z8Y7X6W",
            1200.0,
            "US",
            "Travel Booking",
            0.91,
            RiskLevel::High,
            "2025-12-20 13:48:02",
        ),
        sample(
            "tx_5P6Q7R8S",
            49.5,
            "GB",
            "Food Delivery",
            0.78,
            RiskLevel::Medium,
            "2025-12-20 13:10:45",
        ),
        sample(
            "tx_7L8M9N0O",
            310.25,
            "DE",
            "Fashion Retail",
            0.82,
            RiskLevel::Medium,
            "2025-12-20 12:55:18",
        ),
    ]
}

fn sample(
    id: &str,
    amount: f64,
    country: &str,
    merchant: &str,
    score: f64,
    risk_level: RiskLevel,
    timestamp: &str,
) -> AnomalyRecord {
    AnomalyRecord {
        transaction_id: TransactionId::from(id),
        amount,
        currency: "GBP".to_string(),
        country: country.to_string(),
        merchant: merchant.to_string(),
        score,
        risk_level,
        timestamp: timestamp.to_string(),
    }
}
