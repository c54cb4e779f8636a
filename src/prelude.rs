pub use crate::builder::HashRingBuilder;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::hash::{Murmur3, RingHasher, Xxh3};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::RingMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
pub use crate::ring::{DEFAULT_COLLISION_SALT, DEFAULT_REPLICAS, HashRing, Ring};
pub use crate::traits::Node;
