// View models handed to the page renderer and the JSON API

use serde::Serialize;

use dashboard_domain::{AnomalyRecord, DashboardMetrics, RiskLevel};

/// Output of one pass over the record source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub records: Vec<AnomalyRecord>,
    pub metrics: DashboardMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub header: HeaderView,
    pub kpis: [KpiCard; 3],
    pub architecture: Vec<ArchitectureCard>,
    pub table: TableView,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub meta: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiTone {
    Neutral,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub footer: String,
    pub tone: KpiTone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitectureCard {
    pub name: String,
    pub identifier: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub subtitle: String,
    pub refresh_label: String,
    pub columns: Vec<String>,
    pub rows: Vec<AnomalyRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyRowView {
    pub transaction_id: String,
    pub amount: String,
    pub country: String,
    pub merchant: String,
    pub score: String,
    pub risk_label: String,
    pub badge: RiskBadge,
    pub timestamp: String,
}

/// Two styles only: `High` gets its own badge, every other level shares one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBadge {
    High,
    Medium,
}

impl RiskBadge {
    pub fn for_level(level: RiskLevel) -> Self {
        if level == RiskLevel::High {
            RiskBadge::High
        } else {
            RiskBadge::Medium
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskBadge::High => "risk-high",
            RiskBadge::Medium => "risk-medium",
        }
    }
}
