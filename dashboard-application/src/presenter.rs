//! Pure mapping from a [`DashboardSnapshot`] to the [`DashboardView`] the page
//! renderer consumes. All number formatting happens here; the metrics carry
//! unrounded values.

use dashboard_domain::{AnomalyRecord, AverageBasis, DashboardMetrics, DashboardSettings};

use crate::dtos::{
    AnomalyRowView, ArchitectureCard, DashboardSnapshot, DashboardView, HeaderView, KpiCard,
    KpiTone, RiskBadge, TableView,
};

pub const EMPTY_VALUE: &str = "n/a";

const TABLE_COLUMNS: [&str; 7] = [
    "Transaction ID",
    "Amount",
    "Country",
    "Merchant",
    "Anomaly score",
    "Risk",
    "Timestamp",
];

const TABLE_SUBTITLE: &str = "This dashboard currently uses sample data. In the full version, \
rows are streamed from the Lambda + DynamoDB pipeline on AWS.";

const FOOTER: &str =
    "Built with AWS (S3, Lambda, DynamoDB, SageMaker), Terraform, and React + Vite.";

pub fn build_dashboard_view(
    settings: &DashboardSettings,
    snapshot: &DashboardSnapshot,
) -> DashboardView {
    DashboardView {
        header: HeaderView {
            badge: settings.badge.clone(),
            title: settings.title.clone(),
            subtitle: settings.subtitle.clone(),
            meta: vec![
                format!("Region: {}", settings.region),
                format!("Environment: {}", settings.environment),
            ],
        },
        kpis: kpi_cards(&snapshot.metrics, &snapshot.records),
        architecture: if settings.show_architecture {
            architecture_cards()
        } else {
            Vec::new()
        },
        table: TableView {
            title: "Flagged Transactions (Mock Data)".to_string(),
            subtitle: TABLE_SUBTITLE.to_string(),
            refresh_label: "Refresh".to_string(),
            columns: TABLE_COLUMNS.iter().map(|column| column.to_string()).collect(),
            rows: snapshot.records.iter().map(row_view).collect(),
        },
        footer: FOOTER.to_string(),
    }
}

fn kpi_cards(metrics: &DashboardMetrics, records: &[AnomalyRecord]) -> [KpiCard; 3] {
    let (average_label, average_footer) = match metrics.average_basis {
        AverageBasis::Score => ("Average anomaly score", "0 = normal · 1 = highly anomalous"),
        AverageBasis::Amount => (
            "Average transaction amount",
            "Mean across flagged transactions",
        ),
    };
    [
        KpiCard {
            label: "Total anomalies".to_string(),
            value: metrics.total.to_string(),
            footer: "Flagged by Isolation Forest".to_string(),
            tone: KpiTone::Neutral,
        },
        KpiCard {
            label: "High risk".to_string(),
            value: metrics.high_risk_count.to_string(),
            footer: "Requires manual review".to_string(),
            tone: KpiTone::Danger,
        },
        KpiCard {
            label: average_label.to_string(),
            value: format_average(metrics, records),
            footer: average_footer.to_string(),
            tone: KpiTone::Neutral,
        },
    ]
}

fn format_average(metrics: &DashboardMetrics, records: &[AnomalyRecord]) -> String {
    let Some(value) = metrics.average_value else {
        return EMPTY_VALUE.to_string();
    };
    match metrics.average_basis {
        AverageBasis::Score => format_fixed(value),
        AverageBasis::Amount => match shared_currency(records) {
            Some(code) => match currency_glyph(code) {
                Some(glyph) => format!("{}{}", glyph, format_grouped(value)),
                None => format!("{} {}", code, format_grouped(value)),
            },
            None => format_grouped(value),
        },
    }
}

fn row_view(record: &AnomalyRecord) -> AnomalyRowView {
    AnomalyRowView {
        transaction_id: record.transaction_id.to_string(),
        amount: format!("{} {}", record.currency, format_fixed(record.amount)),
        country: record.country.clone(),
        merchant: record.merchant.clone(),
        score: format_fixed(record.score),
        risk_label: record.risk_level.to_string(),
        badge: RiskBadge::for_level(record.risk_level),
        timestamp: record.timestamp.clone(),
    }
}

fn architecture_cards() -> Vec<ArchitectureCard> {
    [
        (
            "Raw transaction bucket",
            "s3://rt-anomaly-detection-raw",
            "Batches of 50 JSON transactions land under raw/ every 10 seconds.",
        ),
        (
            "Transaction processor",
            "lambda:transaction_processor",
            "Triggered per object; flags transactions and writes them downstream.",
        ),
        (
            "Anomaly model",
            "sagemaker:isolation-forest",
            "Isolation Forest trained on 5,000 rows with 5% contamination.",
        ),
        (
            "Anomalies table",
            "dynamodb:anomalies",
            "Flagged transactions keyed by transaction_id.",
        ),
    ]
    .into_iter()
    .map(|(name, identifier, caption)| ArchitectureCard {
        name: name.to_string(),
        identifier: identifier.to_string(),
        caption: caption.to_string(),
    })
    .collect()
}

fn shared_currency(records: &[AnomalyRecord]) -> Option<&str> {
    let first = records.first()?.currency.as_str();
    records
        .iter()
        .all(|record| record.currency == first)
        .then_some(first)
}

pub fn currency_glyph(code: &str) -> Option<&'static str> {
    match code {
        "GBP" => Some("£"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Two-decimal fixed point, e.g. `0.87`. Exact ties round away from zero,
/// so `0.125` renders as `0.13`.
pub fn format_fixed(value: f64) -> String {
    let scaled = value * 100.0;
    // only odd multiples of 1/8 can sit exactly on a tie
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return format!("{:.2}", scaled.round() / 100.0);
    }
    format!("{:.2}", value)
}

/// Two-decimal fixed point with thousands separators, e.g. `12,345.60`.
pub fn format_grouped(value: f64) -> String {
    let fixed = format_fixed(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
