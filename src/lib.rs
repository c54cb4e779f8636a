//! ringkit: a consistent-hash ring for sharding, cache placement and request
//! routing.
//!
//! Physical nodes are projected onto a 64-bit ring through virtual nodes;
//! keys resolve to the first virtual node at or after their hash. Adding or
//! removing a node remaps only about 1/N of the key space.
//!
//! ```
//! use ringkit::prelude::*;
//!
//! let ring: HashRing<String> = HashRing::new();
//! ring.add_node("10.0.0.1:6379".to_string());
//! ring.add_node("10.0.0.2:6379".to_string());
//!
//! let owner = ring.get("user:42").unwrap();
//! assert!(ring.contains(&owner));
//! ```
//!
//! See [`ring`] for the data layout and invariants.

pub mod builder;
pub mod error;
pub mod hash;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod ring;
pub mod traits;
