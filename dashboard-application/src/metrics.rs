use std::sync::atomic::{AtomicU64, Ordering};

/// Process counters exposed on the ops endpoint. These track requests, not
/// the KPI values, which are never cached.
#[derive(Debug, Default)]
pub struct Metrics {
    dashboard_renders: AtomicU64,
    api_requests: AtomicU64,
    source_errors: AtomicU64,
}

impl Metrics {
    pub fn record_render(&self) {
        self.dashboard_renders.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_api_request(&self) {
        self.api_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_source_error(&self) {
        self.source_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let renders = self.dashboard_renders.load(Ordering::Relaxed);
        let requests = self.api_requests.load(Ordering::Relaxed);
        let errors = self.source_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE anomaly_dashboard_renders_total counter\n\
anomaly_dashboard_renders_total {}\n\
# TYPE anomaly_dashboard_api_requests_total counter\n\
anomaly_dashboard_api_requests_total {}\n\
# TYPE anomaly_dashboard_source_errors_total counter\n\
anomaly_dashboard_source_errors_total {}\n",
            renders, requests, errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prometheus_text_reflects_counters() {
        let metrics = Metrics::default();
        metrics.record_render();
        metrics.record_render();
        metrics.record_api_request();
        let text = metrics.render_prometheus();
        assert!(text.contains("anomaly_dashboard_renders_total 2\n"));
        assert!(text.contains("anomaly_dashboard_api_requests_total 1\n"));
        assert!(text.contains("anomaly_dashboard_source_errors_total 0\n"));
    }
}
