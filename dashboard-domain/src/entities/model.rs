use serde::{Deserialize, Serialize};

use crate::value_objects::AverageBasis;

/// Literal header copy and layout switches. Nothing here is computed from
/// the record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub title: String,
    pub badge: String,
    pub subtitle: String,
    pub region: String,
    pub environment: String,
    pub average_basis: AverageBasis,
    pub show_architecture: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Real\u{2011}Time Transaction Anomaly Detection".to_string(),
            badge: "Side Project".to_string(),
            subtitle: "AWS · Lambda · DynamoDB · SageMaker · Terraform · React".to_string(),
            region: "eu-west-2 (London)".to_string(),
            environment: "Demo".to_string(),
            average_basis: AverageBasis::Score,
            show_architecture: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub fixtures_path: Option<String>,
    pub request_timeout_seconds: u64,
    pub dashboard: DashboardSettings,
}
