//! # Node Identity
//!
//! The ring never inspects node values directly. Everything it needs from a
//! node (or a lookup key) is one capability: a stable string identity.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          Node::identity()                            │
//!   │                                                                      │
//!   │   physical node "10.0.0.1:6379"                                      │
//!   │        │                                                             │
//!   │        ├── vnode 0: hash("10.0.0.1:6379" ++ "0")                      │
//!   │        ├── vnode 1: hash("10.0.0.1:6379" ++ "1")                      │
//!   │        └── ...                                                       │
//!   │                                                                      │
//!   │   lookup key "user:42"                                               │
//!   │        └── position: hash("user:42")                                 │
//!   │                                                                      │
//!   │   equality:  a == b  ⇔  a.identity() == b.identity()                 │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//!
//! - The identity must be deterministic for the lifetime of a registration.
//!   Changing it between `add_node` and `remove_node` orphans virtual entries.
//! - Two values with the same identity are the same node. Re-adding a value
//!   whose identity is already registered replaces the earlier registration.
//!
//! ## Example Usage
//!
//! ```
//! use std::borrow::Cow;
//!
//! use ringkit::traits::Node;
//!
//! #[derive(Clone)]
//! struct Shard {
//!     region: &'static str,
//!     index: u32,
//! }
//!
//! impl Node for Shard {
//!     fn identity(&self) -> Cow<'_, str> {
//!         Cow::Owned(format!("{}-{}", self.region, self.index))
//!     }
//! }
//!
//! let shard = Shard { region: "eu", index: 3 };
//! assert_eq!(shard.identity(), "eu-3");
//! assert_eq!("user:42".identity(), "user:42");
//! ```

use std::borrow::Cow;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Anything that can be placed on (or looked up in) a hash ring.
///
/// Implementations are provided for string types, socket and IP addresses,
/// and are forwarded through `&T`, `Box<T>` and `Arc<T>`, so `Arc<str>` and
/// `&String` work out of the box.
pub trait Node {
    /// Returns the stable identity used for hashing and equality.
    fn identity(&self) -> Cow<'_, str>;
}

impl Node for str {
    #[inline]
    fn identity(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Node for String {
    #[inline]
    fn identity(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Node for SocketAddr {
    fn identity(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl Node for IpAddr {
    fn identity(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: Node + ?Sized> Node for &T {
    #[inline]
    fn identity(&self) -> Cow<'_, str> {
        (**self).identity()
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    #[inline]
    fn identity(&self) -> Cow<'_, str> {
        (**self).identity()
    }
}

impl<T: Node + ?Sized> Node for Arc<T> {
    #[inline]
    fn identity(&self) -> Cow<'_, str> {
        (**self).identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_identities_borrow() {
        let owned = String::from("node-a");
        assert!(matches!(owned.identity(), Cow::Borrowed("node-a")));
        assert!(matches!("node-b".identity(), Cow::Borrowed("node-b")));
    }

    #[test]
    fn address_identities_render_display_form() {
        let addr: SocketAddr = "127.0.0.1:6379".parse().unwrap();
        assert_eq!(addr.identity(), "127.0.0.1:6379");

        let ip: IpAddr = "10.1.2.3".parse().unwrap();
        assert_eq!(ip.identity(), "10.1.2.3");
    }

    #[test]
    fn smart_pointers_forward_identity() {
        let shared: Arc<str> = Arc::from("shared");
        let boxed: Box<String> = Box::new("boxed".to_string());
        let reference = &shared;

        assert_eq!(shared.identity(), "shared");
        assert_eq!(boxed.identity(), "boxed");
        assert_eq!(reference.identity(), "shared");
    }
}
