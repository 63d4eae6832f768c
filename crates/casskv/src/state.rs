//! Shared application state.

use std::sync::Arc;

use anyhow::anyhow;

use casskv_core::storage::KeyValueStore;

use crate::handlers::AppError;

#[cfg(feature = "cassandra")]
use casskv_core::storage::ConnectionConfig;

#[cfg(feature = "cassandra")]
use crate::storage::cassandra::CassandraStore;
#[cfg(feature = "inmemory")]
use crate::storage::inmemory::InMemoryStore;

/// Returned on every request while no connection details are configured.
const BIND_INSTRUCTIONS: &str = "\
You must supply Cassandra connection details to this application.

Provision a Cassandra instance and export its connection details before
starting the server:

    export CASSANDRA_NODES=10.0.0.1,10.0.0.2
    export CASSANDRA_USERNAME=cassandra
    export CASSANDRA_PASSWORD=cassandra
";

/// Shared application state, cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Backing store; `None` while the service is unbound.
    store: Option<Arc<dyn KeyValueStore>>,
}

impl AppState {
    /// State without a backing store. Every request answers 500 with
    /// binding instructions until connection details are supplied.
    pub fn unbound() -> Self {
        Self { store: None }
    }

    /// State backed by the given store implementation.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store: Some(store) }
    }

    /// State backed by a lazily-connected Cassandra session.
    #[cfg(feature = "cassandra")]
    pub fn cassandra(config: ConnectionConfig) -> Self {
        Self::new(Arc::new(CassandraStore::new(config)))
    }

    /// State backed by the in-memory store.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// The backing store, or the binding instructions as an error.
    ///
    /// Handlers call this first, so an unbound service short-circuits
    /// every request before any other work happens.
    pub fn store(&self) -> Result<&Arc<dyn KeyValueStore>, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::from(anyhow!(BIND_INSTRUCTIONS)))
    }
}
