//! End-to-end tests for the dashboard router.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use dashboard_application::{AppState, Metrics};
use dashboard_domain::{
    AnomalyRecord, AnomalyRepository, DashboardSettings, RiskLevel, RuntimeConfig, TransactionId,
};
use dashboard_interfaces_http::build_router;

struct FixtureRepository(Vec<AnomalyRecord>);

#[async_trait]
impl AnomalyRepository for FixtureRepository {
    async fn list_anomalies(&self) -> anyhow::Result<Vec<AnomalyRecord>> {
        Ok(self.0.clone())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

struct BrokenRepository;

#[async_trait]
impl AnomalyRepository for BrokenRepository {
    async fn list_anomalies(&self) -> anyhow::Result<Vec<AnomalyRecord>> {
        Err(anyhow!("fixture file missing"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow!("fixture file missing"))
    }
}

fn record(id: &str, amount: f64, score: f64, risk_level: RiskLevel) -> AnomalyRecord {
    AnomalyRecord {
        transaction_id: TransactionId::from(id),
        amount,
        currency: "GBP".to_string(),
        country: "GB".to_string(),
        merchant: "Online Electronics".to_string(),
        score,
        risk_level,
        timestamp: "2025-12-20 14:32:11".to_string(),
    }
}

fn app(repo: Arc<dyn AnomalyRepository>, api_token: Option<&str>) -> (Router, Arc<Metrics>) {
    let metrics = Arc::new(Metrics::default());
    let state = AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: api_token.map(ToString::to_string),
            fixtures_path: None,
            request_timeout_seconds: 15,
            dashboard: DashboardSettings::default(),
        },
        anomaly_repo: repo,
        metrics: metrics.clone(),
    };
    (build_router(state), metrics)
}

fn sample_repo() -> Arc<dyn AnomalyRepository> {
    Arc::new(FixtureRepository(vec![
        record("tx_1A2B3C4D", 259.99, 0.9, RiskLevel::High),
        record("tx_5P6Q7R8S", 49.5, 0.1, RiskLevel::Medium),
    ]))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn dashboard_page_renders_html() {
    let (app, metrics) = app(sample_repo(), None);
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("data-transaction-id=\"tx_1A2B3C4D\""));
    assert!(html.contains("<span class=\"risk-pill risk-high\">High</span>"));
    assert!(metrics.render_prometheus().contains("anomaly_dashboard_renders_total 1\n"));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let (app, _) = app(sample_repo(), None);
    let response = app.oneshot(get("/assets/dashboard.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let css = body_text(response).await;
    assert!(css.contains(".risk-high"));
}

#[tokio::test]
async fn summary_reports_kpis() {
    let (app, _) = app(sample_repo(), None);
    let response = app.oneshot(get("/v1/dashboard/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["total"], 2);
    assert_eq!(body["high_risk_count"], 1);
    let average = body["average_value"].as_f64().unwrap();
    assert!((average - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn anomalies_keep_source_order() {
    let (app, _) = app(sample_repo(), None);
    let response = app.oneshot(get("/v1/dashboard/anomalies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["transactionId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["tx_1A2B3C4D", "tx_5P6Q7R8S"]);
}

#[tokio::test]
async fn api_requires_bearer_when_configured() {
    let (app, _) = app(sample_repo(), Some("secret"));
    let response = app
        .clone()
        .oneshot(get("/v1/dashboard/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/v1/dashboard/summary")
        .header(header::AUTHORIZATION, "Bearer secret")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The page itself stays public.
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn broken_source_fails_readiness_and_page() {
    let (app, metrics) = app(Arc::new(BrokenRepository), None);
    let response = app
        .clone()
        .oneshot(get("/v1/ops/health/ready"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .clone()
        .oneshot(get("/v1/ops/health/live"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(metrics
        .render_prometheus()
        .contains("anomaly_dashboard_source_errors_total 1\n"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = app(sample_repo(), None);
    let response = app.oneshot(get("/v2/nothing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn view_model_is_served_as_json() {
    let (app, _) = app(sample_repo(), None);
    let response = app.oneshot(get("/v1/dashboard/view")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    let labels: Vec<&str> = body["kpis"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Total anomalies", "High risk", "Average anomaly score"]
    );
    assert_eq!(body["kpis"][1]["tone"], "danger");
    assert_eq!(body["kpis"][2]["value"], "0.50");
    assert_eq!(body["table"]["rows"][0]["transaction_id"], "tx_1A2B3C4D");
    assert_eq!(body["table"]["rows"][0]["amount"], "GBP 259.99");
}

#[tokio::test]
async fn prometheus_is_gated_and_counts_requests() {
    let (app, _) = app(sample_repo(), Some("secret"));
    let response = app
        .clone()
        .oneshot(get("/v1/ops/metrics/prometheus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let authorized = |uri: &str| {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap()
    };
    let response = app
        .clone()
        .oneshot(authorized("/v1/dashboard/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(authorized("/v1/ops/metrics/prometheus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    let text = body_text(response).await;
    assert!(text.contains("anomaly_dashboard_api_requests_total 1\n"));
    assert!(text.contains("anomaly_dashboard_renders_total 0\n"));
}
