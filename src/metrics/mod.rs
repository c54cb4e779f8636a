//! Ring metrics (requires the `metrics` feature).
//!
//! Recording, snapshotting and export are kept apart: the ring records into
//! [`RingMetrics`](metrics_impl::RingMetrics), callers read a
//! [`RingMetricsSnapshot`](snapshot::RingMetricsSnapshot), and exporters such
//! as [`PrometheusTextExporter`](exporter::PrometheusTextExporter) publish it.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
