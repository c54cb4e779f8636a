//! Error types for the ringkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when ring configuration parameters are invalid
//!   (e.g. a zero replica count passed to a fallible builder).
//! - [`InvariantError`]: Returned by `check_invariants` when the sorted
//!   virtual-node index, the slot table and the membership set disagree.
//!
//! Lookups on an empty ring are not errors: `get` returns `None`.
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::builder::HashRingBuilder;
//! use ringkit::error::ConfigError;
//! use ringkit::ring::HashRing;
//!
//! let ring: Result<HashRing<String>, ConfigError> =
//!     HashRingBuilder::new().replicas(64).try_build();
//! assert!(ring.is_ok());
//!
//! let bad = HashRingBuilder::new().replicas(0).try_build::<String>();
//! assert!(bad.is_err());
//! ```

use std::fmt;

// Both error kinds carry a single human-readable description.
macro_rules! described_error {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn new(description: impl Into<String>) -> Self {
                Self(description.into())
            }

            /// Returns the description passed to [`new`](Self::new).
            #[inline]
            pub fn message(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::error::Error for $name {}
    };
}

described_error! {
    /// A ring's keys, slots and members disagree.
    ///
    /// Produced by [`Ring::check_invariants`](crate::ring::Ring::check_invariants)
    /// and [`HashRing::check_invariants`](crate::ring::HashRing::check_invariants);
    /// the message names the first broken relationship found.
    InvariantError
}

described_error! {
    /// Rejected ring configuration.
    ///
    /// Produced by [`HashRingBuilder::try_build`](crate::builder::HashRingBuilder::try_build)
    /// and [`HashRingBuilder::try_build_ring`](crate::builder::HashRingBuilder::try_build_ring).
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::builder::HashRingBuilder;
    ///
    /// let err = HashRingBuilder::new().replicas(0).try_build::<String>().unwrap_err();
    /// assert!(err.to_string().contains("replicas"));
    /// ```
    ConfigError
}
