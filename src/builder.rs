//! Configuration for hash rings.
//!
//! [`HashRingBuilder`] collects the three knobs a ring has (maximum replica
//! count, hasher, collision salt) and builds either the shared [`HashRing`]
//! or the single-owner [`Ring`].
//!
//! ## Example
//!
//! ```rust
//! use ringkit::builder::HashRingBuilder;
//! use ringkit::hash::Xxh3;
//! use ringkit::ring::HashRing;
//!
//! let ring: HashRing<String, Xxh3> = HashRingBuilder::new()
//!     .replicas(256)
//!     .hasher(Xxh3)
//!     .try_build()
//!     .expect("valid ring configuration");
//!
//! ring.add_node("shard-1".to_string());
//! assert_eq!(ring.replicas(), 256);
//! assert_eq!(ring.vnode_count(), 256);
//! ```

use crate::error::ConfigError;
use crate::hash::{Murmur3, RingHasher};
use crate::ring::{DEFAULT_COLLISION_SALT, DEFAULT_REPLICAS, HashRing, Ring};
use crate::traits::Node;

/// Builder for [`HashRing`] and [`Ring`].
///
/// Defaults: [`DEFAULT_REPLICAS`] virtual nodes per node, [`Murmur3`]
/// hashing, [`DEFAULT_COLLISION_SALT`].
#[derive(Debug, Clone)]
pub struct HashRingBuilder<H = Murmur3> {
    replicas: usize,
    hasher: H,
    collision_salt: u64,
}

impl HashRingBuilder<Murmur3> {
    pub fn new() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            hasher: Murmur3,
            collision_salt: DEFAULT_COLLISION_SALT,
        }
    }
}

impl Default for HashRingBuilder<Murmur3> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: RingHasher> HashRingBuilder<H> {
    /// Sets the default and maximum number of virtual nodes per node.
    pub fn replicas(mut self, replicas: usize) -> Self {
        self.replicas = replicas;
        self
    }

    /// Replaces the hasher used for virtual nodes, keys and tie-breaks.
    pub fn hasher<H2: RingHasher>(self, hasher: H2) -> HashRingBuilder<H2> {
        HashRingBuilder {
            replicas: self.replicas,
            hasher,
            collision_salt: self.collision_salt,
        }
    }

    /// Sets the salt mixed into the tie-break hash of colliding slots.
    pub fn collision_salt(mut self, salt: u64) -> Self {
        self.collision_salt = salt;
        self
    }

    /// Builds a shared ring, rejecting invalid configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::builder::HashRingBuilder;
    ///
    /// let err = HashRingBuilder::new().replicas(0).try_build::<String>().unwrap_err();
    /// assert_eq!(err.message(), "replicas must be > 0");
    /// ```
    pub fn try_build<N: Node + Clone>(self) -> Result<HashRing<N, H>, ConfigError> {
        self.try_build_ring().map(HashRing::from)
    }

    /// Builds a single-owner ring, rejecting invalid configuration.
    pub fn try_build_ring<N: Node + Clone>(self) -> Result<Ring<N, H>, ConfigError> {
        if self.replicas == 0 {
            return Err(ConfigError::new("replicas must be > 0"));
        }
        Ok(Ring::from_parts(self.hasher, self.replicas, self.collision_salt))
    }

    /// Builds a shared ring; a replica count of zero is raised to 1.
    pub fn build<N: Node + Clone>(self) -> HashRing<N, H> {
        HashRing::from(self.build_ring())
    }

    /// Builds a single-owner ring; a replica count of zero is raised to 1.
    pub fn build_ring<N: Node + Clone>(self) -> Ring<N, H> {
        Ring::from_parts(self.hasher, self.replicas.max(1), self.collision_salt)
    }
}
