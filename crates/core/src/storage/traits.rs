use async_trait::async_trait;

use super::Result;

/// Existence-checked key/value storage.
///
/// Implementations validate identifiers before any network call, re-check
/// schema-object existence in the catalog on every dependent operation
/// (results are never cached), and keep creation and deletion idempotent.
/// Check-then-act sequences are not atomic; concurrent creators can race.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// True if the keyspace exists in the system catalog.
    async fn keyspace_exists(&self, keyspace: &str) -> Result<bool>;

    /// True if the table exists within the keyspace.
    async fn table_exists(&self, keyspace: &str, table: &str) -> Result<bool>;

    /// Creates a keyspace with single-node replication. No-op if it
    /// already exists.
    async fn create_keyspace(&self, keyspace: &str) -> Result<()>;

    /// Drops a keyspace. No-op if it does not exist.
    async fn delete_keyspace(&self, keyspace: &str) -> Result<()>;

    /// Creates a two-column key/value table (`id varchar PRIMARY KEY,
    /// value varchar`). No-op if it already exists.
    async fn create_table(&self, keyspace: &str, table: &str) -> Result<()>;

    /// Drops a table. No-op if it does not exist.
    async fn delete_table(&self, keyspace: &str, table: &str) -> Result<()>;

    /// Upserts a key/value pair; an existing key is overwritten. Fails
    /// with `TableNotFound` if the table does not exist.
    async fn store(&self, keyspace: &str, table: &str, key: &str, value: &str) -> Result<()>;

    /// Returns the value stored under `key`. Fails with `TableNotFound`
    /// if the table does not exist and `KeyNotFound` if no row matches.
    async fn fetch(&self, keyspace: &str, table: &str, key: &str) -> Result<String>;
}
