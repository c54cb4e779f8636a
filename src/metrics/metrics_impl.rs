use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{RingMetricsReadRecorder, RingMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct RingMetrics {
    pub add_calls: u64,
    pub add_replaced: u64,
    pub add_clamped: u64,
    pub vnodes_inserted: u64,
    pub slot_collisions: u64,
    pub remove_calls: u64,
    pub remove_noops: u64,
    pub vnodes_removed: u64,
    pub clear_calls: u64,
    pub get_calls: MetricsCell,
    pub get_hits: MetricsCell,
    pub get_misses: MetricsCell,
    pub collision_tiebreaks: MetricsCell,
    pub get_n_calls: MetricsCell,
}

impl RingMetrics {
    pub fn reset(&mut self) {
        self.add_calls = 0;
        self.add_replaced = 0;
        self.add_clamped = 0;
        self.vnodes_inserted = 0;
        self.slot_collisions = 0;
        self.remove_calls = 0;
        self.remove_noops = 0;
        self.vnodes_removed = 0;
        self.clear_calls = 0;
        self.get_calls.reset();
        self.get_hits.reset();
        self.get_misses.reset();
        self.collision_tiebreaks.reset();
        self.get_n_calls.reset();
    }
}

impl RingMetricsRecorder for RingMetrics {
    fn record_add_call(&mut self) {
        self.add_calls += 1;
    }
    fn record_add_replaced(&mut self) {
        self.add_replaced += 1;
    }
    fn record_add_clamped(&mut self) {
        self.add_clamped += 1;
    }
    fn record_vnode_inserted(&mut self) {
        self.vnodes_inserted += 1;
    }
    fn record_slot_collision(&mut self) {
        self.slot_collisions += 1;
    }
    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }
    fn record_remove_noop(&mut self) {
        self.remove_noops += 1;
    }
    fn record_vnode_removed(&mut self) {
        self.vnodes_removed += 1;
    }
    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl RingMetricsReadRecorder for RingMetrics {
    fn record_get_call(&self) {
        self.get_calls.incr();
    }
    fn record_get_hit(&self) {
        self.get_hits.incr();
    }
    fn record_get_miss(&self) {
        self.get_misses.incr();
    }
    fn record_collision_tiebreak(&self) {
        self.collision_tiebreaks.incr();
    }
    fn record_get_n_call(&self) {
        self.get_n_calls.incr();
    }
}
