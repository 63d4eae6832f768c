//! Core abstractions for the casskv service.
//!
//! This crate defines the storage contract the HTTP layer is written
//! against: the failure taxonomy, identifier validation, the connection
//! descriptor, and the [`storage::KeyValueStore`] trait. It performs no
//! I/O itself; concrete backends live in the `casskv` binary crate.

pub mod storage;
