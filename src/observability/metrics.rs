//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define dispatch metrics (requests by zone and decision, latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `zone_requests_total` (counter): dispatched requests by zone, decision
//! - `zone_dispatch_duration_seconds` (histogram): dispatch latency
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels carry the zone label and guard decision, never the path

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::GuardDecision;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one dispatched request.
pub fn record_dispatch(zone: &str, decision: GuardDecision, start: Instant) {
    metrics::counter!(
        "zone_requests_total",
        "zone" => zone.to_string(),
        "decision" => decision.as_str()
    )
    .increment(1);
    metrics::histogram!("zone_dispatch_duration_seconds").record(start.elapsed().as_secs_f64());
}
