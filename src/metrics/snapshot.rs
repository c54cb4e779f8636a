#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RingMetricsSnapshot {
    pub add_calls: u64,
    pub add_replaced: u64, // re-adds of an already registered identity
    pub add_clamped: u64,
    pub vnodes_inserted: u64,
    pub slot_collisions: u64, // inserts that landed on an occupied slot

    pub remove_calls: u64,
    pub remove_noops: u64,
    pub vnodes_removed: u64,
    pub clear_calls: u64,

    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub collision_tiebreaks: u64,
    pub get_n_calls: u64,

    // gauges captured at snapshot time
    pub members: usize,
    pub vnodes: usize,
    pub replicas: usize,
}

impl RingMetricsSnapshot {
    /// Fraction of `get` calls that resolved to a node, or `0.0` before any call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
