//! Consistent-hash ring with virtual nodes.
//!
//! Maps an unbounded key space onto a dynamic set of physical nodes. Each
//! physical node is projected onto the 64-bit ring at `replicas` positions
//! (virtual nodes); a key belongs to the first virtual node at or after its own
//! hash, wrapping around past `u64::MAX`. Adding or removing a node only moves
//! the keys adjacent to that node's virtual nodes (about 1/N of the key space).
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                              Ring<N, H>                                  │
//!   │                                                                          │
//!   │   keys: Vec<u64> (strictly ascending)                                    │
//!   │   ┌──────┬──────┬──────┬──────┬──────┬──────┐                            │
//!   │   │ 0x0a │ 0x3f │ 0x51 │ 0x9c │ 0xc4 │ 0xf0 │                            │
//!   │   └──┬───┴──┬───┴──┬───┴──┬───┴──┬───┴──┬───┘                            │
//!   │      ▼      ▼      ▼      ▼      ▼      ▼                                │
//!   │   slots: FxHashMap<u64, Vec<N>>                                          │
//!   │     [A]    [B]    [A]   [C,B]   [B]    [C]     ← [C,B]: hash collision   │
//!   │                                                                          │
//!   │   members: FxHashMap<identity, (node, replicas)>                         │
//!   │     "A" → 100, "B" → 100, "C" → 10                                       │
//!   └──────────────────────────────────────────────────────────────────────────┘
//!
//!   get("user:42"):
//!     h = hash("user:42")                    e.g. 0x60
//!     i = first key ≥ h, mod len(keys)       → 0x9c
//!     slot [C,B] has two nodes               → tie-break on hash(salt ":" key)
//! ```
//!
//! ## Key Concepts
//!
//! - **Deterministic virtual nodes**: virtual node `i` of a node sits at
//!   `hash(identity ++ decimal(i))`, so removal recomputes positions instead of
//!   keeping a reverse index.
//! - **Collision slots**: identical hash values share one slot holding every
//!   node that produced it; lookups pick among them with a salted secondary
//!   hash of the key, stable while the colliding set is unchanged.
//! - **Idempotent membership**: adding a registered identity replaces its old
//!   virtual nodes; removing an unknown identity is a no-op.
//! - **Replica clamp**: per-node replica counts above the ring maximum are
//!   silently reduced to the maximum.
//!
//! ## Concurrency
//!
//! [`Ring`] is the single-owner core (`&mut self` to mutate). [`HashRing`]
//! wraps it in a `parking_lot::RwLock`: lookups share the read lock, add and
//! remove hold the write lock for the whole mutation, so a lookup never sees a
//! partially updated ring.
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::ring::HashRing;
//!
//! let ring: HashRing<String> = HashRing::new();
//! ring.add_node("cache-a:11211".to_string());
//! ring.add_node("cache-b:11211".to_string());
//! ring.add_node_with_replicas("cache-small:11211".to_string(), 10);
//!
//! let owner = ring.get("session:8f2c").expect("ring is not empty");
//! assert_eq!(ring.get("session:8f2c"), Some(owner.clone()));
//!
//! ring.remove_node(&owner);
//! assert_ne!(ring.get("session:8f2c"), Some(owner));
//! ```
//!
//! ## Performance
//!
//! | Operation     | Time               | Notes                                  |
//! |---------------|--------------------|----------------------------------------|
//! | `get`         | O(log V)           | Binary search over sorted keys         |
//! | `get_n`       | O(V) worst case    | Walks clockwise until `n` distinct     |
//! | `add_node`    | O(R + V log V)     | Re-sorts merged key list               |
//! | `remove_node` | O(R + V log R)     | One retain pass over the key list      |
//! | `contains`    | O(1)               | Membership map                         |

use std::borrow::Cow;
use std::fmt::Write as _;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::HashRingBuilder;
use crate::error::InvariantError;
use crate::hash::{Murmur3, RingHasher};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::RingMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RingMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, RingMetricsReadRecorder, RingMetricsRecorder,
};
use crate::traits::Node;

/// Default (and maximum) number of virtual nodes per physical node.
pub const DEFAULT_REPLICAS: usize = 100;

/// Default salt mixed into the tie-break hash for colliding slots.
pub const DEFAULT_COLLISION_SALT: u64 = 16_777_619;

const MAX_PREALLOCATED_VNODES: usize = 1024;

#[derive(Debug, Clone)]
struct Member<N> {
    node: N,
    replicas: usize,
}

/// Single-owner consistent-hash ring.
///
/// Mutation takes `&mut self`; wrap in [`HashRing`] to share across threads.
#[derive(Debug, Clone)]
pub struct Ring<N, H = Murmur3> {
    hasher: H,
    replicas: usize,
    collision_salt: u64,
    keys: Vec<u64>,
    slots: FxHashMap<u64, Vec<N>>,
    members: FxHashMap<String, Member<N>>,
    #[cfg(feature = "metrics")]
    metrics: RingMetrics,
}

impl<N> Ring<N, Murmur3>
where
    N: Node + Clone,
{
    /// Creates an empty ring with the Murmur3 hasher and
    /// [`DEFAULT_REPLICAS`] virtual nodes per node.
    pub fn new() -> Self {
        Self::with_hasher(Murmur3)
    }
}

impl<N> Default for Ring<N, Murmur3>
where
    N: Node + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, H> Ring<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    /// Creates an empty ring positioned by `hasher`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::hash::Xxh3;
    /// use ringkit::ring::Ring;
    ///
    /// let mut ring = Ring::with_hasher(Xxh3);
    /// ring.add_node("a");
    /// assert_eq!(ring.get("key"), Some(&"a"));
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self::from_parts(hasher, DEFAULT_REPLICAS, DEFAULT_COLLISION_SALT)
    }

    pub(crate) fn from_parts(hasher: H, replicas: usize, collision_salt: u64) -> Self {
        Self {
            hasher,
            replicas,
            collision_salt,
            keys: Vec::new(),
            slots: FxHashMap::default(),
            members: FxHashMap::default(),
            #[cfg(feature = "metrics")]
            metrics: RingMetrics::default(),
        }
    }

    /// Returns the maximum (and default) replica count per node.
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Returns the salt used to break ties inside collision slots.
    pub fn collision_salt(&self) -> u64 {
        self.collision_salt
    }

    /// Returns the number of registered physical nodes.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the number of distinct virtual-node positions on the ring.
    pub fn vnode_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if a node with the same identity is registered.
    pub fn contains<K: Node + ?Sized>(&self, node: &K) -> bool {
        self.members.contains_key(&*node.identity())
    }

    /// Returns the replica count applied at the node's most recent add.
    pub fn replicas_of<K: Node + ?Sized>(&self, node: &K) -> Option<usize> {
        self.members
            .get(&*node.identity())
            .map(|member| member.replicas)
    }

    /// Iterates over registered nodes (the value passed to the latest add).
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.members.values().map(|member| &member.node)
    }

    /// Adds `node` with the ring's default replica count.
    ///
    /// Returns the number of virtual nodes placed.
    pub fn add_node(&mut self, node: N) -> usize {
        self.add_node_with_replicas(node, self.replicas)
    }

    /// Adds `node` with `replicas` virtual nodes.
    ///
    /// `replicas` is clamped to [`replicas()`](Self::replicas). A node whose
    /// identity is already registered is removed first, so re-adding is
    /// idempotent and may change the replica count in place. A count of zero
    /// leaves the node unregistered.
    ///
    /// Returns the replica count actually applied.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.add_node_with_replicas("a", 10_000), ring.replicas());
    /// assert_eq!(ring.add_node_with_replicas("a", 5), 5);
    /// assert_eq!(ring.replicas_of("a"), Some(5));
    /// ```
    pub fn add_node_with_replicas(&mut self, node: N, replicas: usize) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_add_call();

        let identity = node.identity().into_owned();
        let applied = replicas.min(self.replicas);
        if applied < replicas {
            trace!(node = %identity, requested = replicas, applied, "clamped replica count");
            #[cfg(feature = "metrics")]
            self.metrics.record_add_clamped();
        }

        let replaced = self.remove_identity(&identity);
        #[cfg(feature = "metrics")]
        if replaced {
            self.metrics.record_add_replaced();
        }

        if applied == 0 {
            debug!(node = %identity, replaced, "node added with zero replicas, left unregistered");
            return 0;
        }

        let mut buf = String::with_capacity(identity.len() + 4);
        // The maximum is caller-chosen and may be far larger than any real count.
        let mut fresh = Vec::with_capacity(applied.min(MAX_PREALLOCATED_VNODES));
        for index in 0..applied {
            let position = vnode_position(&self.hasher, &identity, index, &mut buf);
            let slot = self.slots.entry(position).or_default();
            if slot.is_empty() {
                fresh.push(position);
            } else {
                #[cfg(feature = "metrics")]
                self.metrics.record_slot_collision();
            }
            slot.push(node.clone());
            #[cfg(feature = "metrics")]
            self.metrics.record_vnode_inserted();
        }

        if !fresh.is_empty() {
            self.keys.extend_from_slice(&fresh);
            self.keys.sort_unstable();
        }

        self.members.insert(
            identity.clone(),
            Member {
                node,
                replicas: applied,
            },
        );
        debug!(node = %identity, replicas = applied, replaced, "added node to ring");
        applied
    }

    /// Removes every virtual node of `node` and its membership record.
    ///
    /// Returns `false` (and does nothing) if the node is not registered.
    pub fn remove_node<K: Node + ?Sized>(&mut self, node: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let identity = node.identity();
        let removed = self.remove_identity(&identity);
        if removed {
            debug!(node = %identity, "removed node from ring");
        } else {
            #[cfg(feature = "metrics")]
            self.metrics.record_remove_noop();
        }
        removed
    }

    fn remove_identity(&mut self, identity: &str) -> bool {
        let Some(member) = self.members.remove(identity) else {
            return false;
        };

        let mut buf = String::with_capacity(identity.len() + 4);
        let mut emptied = Vec::new();
        for index in 0..member.replicas {
            let position = vnode_position(&self.hasher, identity, index, &mut buf);
            let Some(slot) = self.slots.get_mut(&position) else {
                continue;
            };
            #[cfg(feature = "metrics")]
            let before = slot.len();
            slot.retain(|node| node.identity() != identity);
            #[cfg(feature = "metrics")]
            for _ in slot.len()..before {
                self.metrics.record_vnode_removed();
            }
            if slot.is_empty() {
                self.slots.remove(&position);
                emptied.push(position);
            }
        }

        if !emptied.is_empty() {
            emptied.sort_unstable();
            self.keys.retain(|key| emptied.binary_search(key).is_err());
        }
        true
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.keys.clear();
        self.slots.clear();
        self.members.clear();
        debug!("cleared ring");
    }

    /// Returns the node responsible for `key`, or `None` if the ring is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.get("k"), None);
    ///
    /// ring.add_node("only");
    /// assert_eq!(ring.get("k"), Some(&"only"));
    /// ```
    pub fn get<K: Node + ?Sized>(&self, key: &K) -> Option<&N> {
        #[cfg(feature = "metrics")]
        self.metrics.record_get_call();

        let found = self.lookup(&key.identity());

        #[cfg(feature = "metrics")]
        if found.is_some() {
            self.metrics.record_get_hit();
        } else {
            self.metrics.record_get_miss();
        }
        found
    }

    fn lookup(&self, identity: &str) -> Option<&N> {
        if self.members.is_empty() || self.keys.is_empty() {
            return None;
        }

        let index = self.successor(identity);
        let slot = self.slots.get(&self.keys[index])?;
        match slot.as_slice() {
            [] => None,
            [only] => Some(only),
            colliding => {
                #[cfg(feature = "metrics")]
                self.metrics.record_collision_tiebreak();
                Some(&colliding[self.tiebreak(identity, colliding.len())])
            },
        }
    }

    /// Returns up to `n` distinct nodes, walking clockwise from `key`.
    ///
    /// The first node is the one [`get`](Self::get) returns. Fewer than `n`
    /// nodes are returned when fewer are registered.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// for node in ["a", "b", "c"] {
    ///     ring.add_node(node);
    /// }
    ///
    /// let owners = ring.get_n("object-7", 2);
    /// assert_eq!(owners.len(), 2);
    /// assert_eq!(Some(owners[0]), ring.get("object-7"));
    /// assert_ne!(owners[0], owners[1]);
    /// assert_eq!(ring.get_n("object-7", 10).len(), 3);
    /// ```
    pub fn get_n<K: Node + ?Sized>(&self, key: &K, n: usize) -> Vec<&N> {
        #[cfg(feature = "metrics")]
        self.metrics.record_get_n_call();

        let want = n.min(self.members.len());
        if want == 0 || self.keys.is_empty() {
            return Vec::new();
        }

        let identity = key.identity();
        let start = self.successor(&identity);
        let mut owners: Vec<&N> = Vec::with_capacity(want);
        let mut seen: Vec<Cow<'_, str>> = Vec::with_capacity(want);

        for step in 0..self.keys.len() {
            let position = self.keys[(start + step) % self.keys.len()];
            let Some(slot) = self.slots.get(&position) else {
                continue;
            };
            let first = if slot.len() > 1 {
                self.tiebreak(&identity, slot.len())
            } else {
                0
            };
            for offset in 0..slot.len() {
                let node = &slot[(first + offset) % slot.len()];
                let node_identity = node.identity();
                if seen.contains(&node_identity) {
                    continue;
                }
                seen.push(node_identity);
                owners.push(node);
                if owners.len() == want {
                    return owners;
                }
            }
        }
        owners
    }

    /// Index into `keys` of the first position at or after `identity`'s hash.
    ///
    /// Callers guarantee `keys` is non-empty.
    fn successor(&self, identity: &str) -> usize {
        let position = self.hasher.hash(identity.as_bytes());
        self.keys.partition_point(|&key| key < position) % self.keys.len()
    }

    fn tiebreak(&self, identity: &str, len: usize) -> usize {
        let salted = format!("{}:{}", self.collision_salt, identity);
        (self.hasher.hash(salted.as_bytes()) % len as u64) as usize
    }

    /// Validates the relationship between keys, slots and members.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// ring.add_node("a");
    /// ring.add_node_with_replicas("b", 3);
    /// ring.remove_node("a");
    /// assert!(ring.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if let Some(at) = self.keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(InvariantError::new(format!(
                "virtual keys not strictly ascending at index {}: {:#x} >= {:#x}",
                at,
                self.keys[at],
                self.keys[at + 1]
            )));
        }
        if self.keys.len() != self.slots.len() {
            return Err(InvariantError::new(format!(
                "{} virtual keys but {} slots",
                self.keys.len(),
                self.slots.len()
            )));
        }

        let mut entries = 0usize;
        for key in &self.keys {
            let slot = self.slots.get(key).ok_or_else(|| {
                InvariantError::new(format!("virtual key {:#x} has no slot", key))
            })?;
            if slot.is_empty() {
                return Err(InvariantError::new(format!(
                    "slot {:#x} is empty but still indexed",
                    key
                )));
            }
            for node in slot {
                let identity = node.identity();
                if !self.members.contains_key(&*identity) {
                    return Err(InvariantError::new(format!(
                        "slot {:#x} holds unregistered node {:?}",
                        key, identity
                    )));
                }
            }
            entries += slot.len();
        }

        let mut expected = 0usize;
        let mut buf = String::new();
        for (identity, member) in &self.members {
            if member.replicas == 0 || member.replicas > self.replicas {
                return Err(InvariantError::new(format!(
                    "node {:?} registered with {} replicas (max {})",
                    identity, member.replicas, self.replicas
                )));
            }
            for index in 0..member.replicas {
                let position = vnode_position(&self.hasher, identity, index, &mut buf);
                let present = self
                    .slots
                    .get(&position)
                    .is_some_and(|slot| slot.iter().any(|node| node.identity() == *identity));
                if !present {
                    return Err(InvariantError::new(format!(
                        "virtual node {} of {:?} missing at {:#x}",
                        index, identity, position
                    )));
                }
            }
            expected += member.replicas;
        }

        if entries != expected {
            return Err(InvariantError::new(format!(
                "slots hold {} entries but members account for {}",
                entries, expected
            )));
        }
        Ok(())
    }
}

/// Metrics functionality (requires `metrics` feature).
#[cfg(feature = "metrics")]
impl<N, H> Ring<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    /// Returns a snapshot of ring counters and gauges.
    pub fn metrics_snapshot(&self) -> RingMetricsSnapshot {
        RingMetricsSnapshot {
            add_calls: self.metrics.add_calls,
            add_replaced: self.metrics.add_replaced,
            add_clamped: self.metrics.add_clamped,
            vnodes_inserted: self.metrics.vnodes_inserted,
            slot_collisions: self.metrics.slot_collisions,
            remove_calls: self.metrics.remove_calls,
            remove_noops: self.metrics.remove_noops,
            vnodes_removed: self.metrics.vnodes_removed,
            clear_calls: self.metrics.clear_calls,
            get_calls: self.metrics.get_calls.get(),
            get_hits: self.metrics.get_hits.get(),
            get_misses: self.metrics.get_misses.get(),
            collision_tiebreaks: self.metrics.collision_tiebreaks.get(),
            get_n_calls: self.metrics.get_n_calls.get(),
            members: self.members.len(),
            vnodes: self.keys.len(),
            replicas: self.replicas,
        }
    }

    /// Zeroes every counter; gauges follow the ring's current state.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<N, H> MetricsSnapshotProvider<RingMetricsSnapshot> for Ring<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    fn snapshot(&self) -> RingMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Position of virtual node `index` of `identity`: `hash(identity ++ decimal(index))`.
fn vnode_position<H: RingHasher>(
    hasher: &H,
    identity: &str,
    index: usize,
    buf: &mut String,
) -> u64 {
    buf.clear();
    buf.push_str(identity);
    let _ = write!(buf, "{}", index);
    hasher.hash(buf.as_bytes())
}

// ---------------------------------------------------------------------------
// HashRing
// ---------------------------------------------------------------------------

/// Thread-safe consistent-hash ring.
///
/// A [`Ring`] behind a `parking_lot::RwLock`. Lookups run concurrently; add,
/// remove and clear are exclusive. Lookups return owned clones because no
/// lock is held once a call returns.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use ringkit::ring::HashRing;
///
/// let ring = Arc::new(HashRing::new());
/// ring.add_node("10.0.0.1:6379".to_string());
///
/// let reader = {
///     let ring = ring.clone();
///     thread::spawn(move || ring.get("user:1"))
/// };
/// assert_eq!(reader.join().unwrap().as_deref(), Some("10.0.0.1:6379"));
/// ```
#[derive(Debug)]
pub struct HashRing<N, H = Murmur3> {
    inner: RwLock<Ring<N, H>>,
}

impl<N> HashRing<N, Murmur3>
where
    N: Node + Clone,
{
    /// Creates an empty ring with the Murmur3 hasher and
    /// [`DEFAULT_REPLICAS`] virtual nodes per node.
    pub fn new() -> Self {
        Self::with_hasher(Murmur3)
    }

    /// Returns a builder for custom replica counts, hashers and salts.
    pub fn builder() -> HashRingBuilder {
        HashRingBuilder::new()
    }
}

impl<N> Default for HashRing<N, Murmur3>
where
    N: Node + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, H> From<Ring<N, H>> for HashRing<N, H> {
    fn from(ring: Ring<N, H>) -> Self {
        Self {
            inner: RwLock::new(ring),
        }
    }
}

impl<N, H> HashRing<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    /// Creates an empty ring positioned by `hasher`.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ring::HashRing;
    ///
    /// let ring = HashRing::with_hasher(|bytes: &[u8]| {
    ///     bytes.iter().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
    ///         (h ^ u64::from(*b)).wrapping_mul(0x100_0000_01b3)
    ///     })
    /// });
    /// ring.add_node("a".to_string());
    /// assert_eq!(ring.get("key").as_deref(), Some("a"));
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self::from(Ring::with_hasher(hasher))
    }

    /// Adds `node` with the ring's default replica count. See [`Ring::add_node`].
    pub fn add_node(&self, node: N) -> usize {
        self.inner.write().add_node(node)
    }

    /// See [`Ring::add_node_with_replicas`].
    pub fn add_node_with_replicas(&self, node: N, replicas: usize) -> usize {
        self.inner.write().add_node_with_replicas(node, replicas)
    }

    /// Removes `node` and all of its virtual nodes. See [`Ring::remove_node`].
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::ring::HashRing;
    ///
    /// let ring: HashRing<&str> = HashRing::new();
    /// ring.add_node_with_replicas("a", 8);
    /// assert!(ring.contains("a"));
    ///
    /// assert!(ring.remove_node("a"));
    /// assert!(!ring.remove_node("a"));
    /// assert_eq!((ring.len(), ring.vnode_count()), (0, 0));
    /// ```
    pub fn remove_node<K: Node + ?Sized>(&self, node: &K) -> bool {
        self.inner.write().remove_node(node)
    }

    /// Removes every node under a single write lock.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns the node responsible for `key`, or `None` if the ring is empty.
    pub fn get<K: Node + ?Sized>(&self, key: &K) -> Option<N> {
        self.inner.read().get(key).cloned()
    }

    /// See [`Ring::get_n`].
    pub fn get_n<K: Node + ?Sized>(&self, key: &K, n: usize) -> Vec<N> {
        self.inner
            .read()
            .get_n(key, n)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns `true` if a node with the same identity is registered.
    pub fn contains<K: Node + ?Sized>(&self, node: &K) -> bool {
        self.inner.read().contains(node)
    }

    /// See [`Ring::replicas_of`].
    pub fn replicas_of<K: Node + ?Sized>(&self, node: &K) -> Option<usize> {
        self.inner.read().replicas_of(node)
    }

    /// Returns the maximum (and default) replica count per node.
    pub fn replicas(&self) -> usize {
        self.inner.read().replicas()
    }

    /// Returns the number of registered physical nodes.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the number of distinct virtual-node positions.
    pub fn vnode_count(&self) -> usize {
        self.inner.read().vnode_count()
    }

    /// Returns a clone of every registered node, in no particular order.
    pub fn nodes(&self) -> Vec<N> {
        self.inner.read().nodes().cloned().collect()
    }

    /// Runs `f` against the ring under the read lock.
    ///
    /// Useful for several lookups against one consistent view.
    pub fn read_with<R>(&self, f: impl FnOnce(&Ring<N, H>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Validates the ring under one read lock. See [`Ring::check_invariants`].
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }

    /// Consumes the wrapper and returns the single-owner ring.
    pub fn into_inner(self) -> Ring<N, H> {
        self.inner.into_inner()
    }
}

#[cfg(feature = "metrics")]
impl<N, H> HashRing<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    /// See [`Ring::metrics_snapshot`].
    pub fn metrics_snapshot(&self) -> RingMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<N, H> MetricsSnapshotProvider<RingMetricsSnapshot> for HashRing<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    fn snapshot(&self) -> RingMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<N, H> MetricsReset for HashRing<N, H>
where
    N: Node + Clone,
    H: RingHasher,
{
    fn reset_metrics(&self) {
        self.inner.write().reset_metrics();
    }
}
