//! Prometheus metrics for the demo service

use axum::http::StatusCode;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder; call once at process start
pub fn init_prometheus() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    PROMETHEUS
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Prometheus recorder already installed"))?;
    Ok(())
}

/// Initialize all metric descriptions
pub fn init_metrics() {
    describe_counter!(
        "manifold_requests_total",
        "Total handled requests by operation and status"
    );
    describe_histogram!(
        "manifold_request_latency_seconds",
        "Request handling latency in seconds"
    );
}

/// Record one handled request
pub fn record_request(op: &str, status: StatusCode, elapsed: Duration) {
    counter!(
        "manifold_requests_total", 1,
        "op" => op.to_string(),
        "status" => status.as_u16().to_string()
    );
    histogram!(
        "manifold_request_latency_seconds", elapsed.as_secs_f64(),
        "op" => op.to_string()
    );
}

/// Render the current metrics in Prometheus text format
pub fn render() -> String {
    PROMETHEUS
        .get()
        .map(|handle| handle.render())
        .unwrap_or_default()
}
