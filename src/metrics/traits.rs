//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are split into small traits so the
//! ring's placement logic stays independent of how counters are consumed.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────┐      ┌─────────────────────────────┐
//!   │    RingMetricsRecorder      │      │  RingMetricsReadRecorder    │
//!   │  (&mut self, write lock)    │      │  (&self, shared read lock)  │
//!   │  add / remove / clear       │      │  get / get_n                │
//!   └──────────────┬──────────────┘      └──────────────┬──────────────┘
//!                  │                                    │
//!                  └─────────────────┬──────────────────┘
//!                                    ▼
//!                          ┌───────────────────┐
//!                          │    RingMetrics    │
//!                          └─────────┬─────────┘
//!                                    │ snapshot()
//!                                    ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! ## Design Goals
//! - **Single responsibility**: recorders only write counters; providers only
//!   read/snapshot; exporters only publish to monitoring systems.
//! - **Lock split**: membership changes hold the write lock and record through
//!   `&mut self`; lookups hold the read lock and record through atomics.

/// Counters for membership changes.
pub trait RingMetricsRecorder {
    fn record_add_call(&mut self);
    fn record_add_replaced(&mut self);
    fn record_add_clamped(&mut self);
    fn record_vnode_inserted(&mut self);
    fn record_slot_collision(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_noop(&mut self);
    fn record_vnode_removed(&mut self);
    fn record_clear(&mut self);
}

/// Counters for lookups, which only have `&self`.
pub trait RingMetricsReadRecorder {
    fn record_get_call(&self);
    fn record_get_hit(&self);
    fn record_get_miss(&self);
    fn record_collision_tiebreak(&self);
    fn record_get_n_call(&self);
}

/// Capture a consistent view of counters and gauges.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Publish snapshots to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
