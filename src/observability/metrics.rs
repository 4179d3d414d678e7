//! Metrics collection and exposition.
//!
//! # Metrics
//! - `minihttp_requests_total` (counter): requests by status
//! - `minihttp_request_duration_seconds` (histogram): read-to-write latency
//! - `minihttp_active_connections` (gauge): connections being served
//! - `minihttp_truncated_requests_total` (counter): reads that filled the buffer

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(status: u16, start: Instant) {
    counter!("minihttp_requests_total", "status" => status.to_string()).increment(1);
    histogram!("minihttp_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_truncated_read() {
    counter!("minihttp_truncated_requests_total").increment(1);
}

pub fn connection_opened() {
    gauge!("minihttp_active_connections").increment(1.0);
}

pub fn connection_closed() {
    gauge!("minihttp_active_connections").decrement(1.0);
}
