//! Storage backend implementations.
//!
//! Concrete implementations of `casskv_core::storage::KeyValueStore`,
//! selected via feature flags.
//!
//! # Feature Flags
//!
//! - `cassandra` (default): Cassandra backend using the `scylla` driver
//! - `inmemory` (default): in-memory backend used by the test suite
//!
//! The flags are additive; the in-memory store is a test fixture, not an
//! alternative deployment target, but it can stand in for the driver when
//! the binary is built without `cassandra`.

#[cfg(not(any(feature = "cassandra", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable the 'cassandra' or 'inmemory' feature. \
    Example: cargo build -p casskv --features cassandra"
);

#[cfg(feature = "cassandra")]
pub mod cassandra;

#[cfg(feature = "inmemory")]
pub mod inmemory;
