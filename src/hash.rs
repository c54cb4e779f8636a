//! Hash functions that position keys and virtual nodes on the ring.
//!
//! The ring only needs a deterministic, well-distributed `&[u8] -> u64`
//! mapping. Collision resistance is not required: accidental collisions are
//! resolved by the ring's per-slot node lists.
//!
//! ## Key Components
//!
//! - [`RingHasher`]: the hashing seam used by [`Ring`](crate::ring::Ring) and
//!   [`HashRing`](crate::ring::HashRing).
//! - [`Murmur3`]: default hasher (MurmurHash3 x64-128, low 64 bits, seed 0).
//! - [`Xxh3`]: XXH3-64, faster on long keys.
//! - Any `Fn(&[u8]) -> u64` closure or function pointer.
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::hash::{Murmur3, RingHasher, Xxh3};
//!
//! let a = Murmur3.hash(b"node-a0");
//! assert_eq!(a, Murmur3.hash(b"node-a0"));
//!
//! let b = Xxh3.hash(b"node-a0");
//! assert_eq!(b, Xxh3.hash(b"node-a0"));
//!
//! // Plain functions and closures are hashers too.
//! let fold = |bytes: &[u8]| bytes.iter().fold(0u64, |acc, b| acc * 31 + u64::from(*b));
//! assert_eq!(fold.hash(b"ab"), 97 * 31 + 98);
//! ```

use xxhash_rust::xxh3::xxh3_64;

/// Maps raw bytes to a position on the 64-bit ring.
///
/// Implementations must be deterministic: the ring recomputes virtual-node
/// positions on removal instead of keeping a reverse index.
pub trait RingHasher {
    fn hash(&self, bytes: &[u8]) -> u64;
}

/// MurmurHash3 (x64, 128-bit variant) truncated to its low 64 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3;

impl RingHasher for Murmur3 {
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u64 {
        fastmurmur3::hash(bytes) as u64
    }
}

/// XXH3 64-bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3;

impl RingHasher for Xxh3 {
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u64 {
        xxh3_64(bytes)
    }
}

impl<F> RingHasher for F
where
    F: Fn(&[u8]) -> u64,
{
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u64 {
        self(bytes)
    }
}
