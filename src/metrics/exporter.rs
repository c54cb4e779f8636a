use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::RingMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for ring metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector. Write errors are
/// dropped: metrics never affect placement.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: usize) {
        self.write_metric("gauge", suffix, value as u64);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<RingMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &RingMetricsSnapshot) {
        self.write_counter("add_calls_total", snapshot.add_calls);
        self.write_counter("add_replaced_total", snapshot.add_replaced);
        self.write_counter("add_clamped_total", snapshot.add_clamped);
        self.write_counter("vnodes_inserted_total", snapshot.vnodes_inserted);
        self.write_counter("slot_collisions_total", snapshot.slot_collisions);
        self.write_counter("remove_calls_total", snapshot.remove_calls);
        self.write_counter("remove_noops_total", snapshot.remove_noops);
        self.write_counter("vnodes_removed_total", snapshot.vnodes_removed);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("collision_tiebreaks_total", snapshot.collision_tiebreaks);
        self.write_counter("get_n_calls_total", snapshot.get_n_calls);
        self.write_gauge("members", snapshot.members);
        self.write_gauge("vnodes", snapshot.vnodes);
        self.write_gauge("replicas", snapshot.replicas);
    }
}
