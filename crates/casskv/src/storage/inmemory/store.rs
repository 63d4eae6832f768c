//! In-memory `KeyValueStore` implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use casskv_core::storage::{
    validate_keyspace_name, validate_table_name, KeyValueStore, Result, StoreError,
};

type Table = HashMap<String, String>;
type Keyspace = HashMap<String, Table>;

/// In-memory storage backend for the test suite.
///
/// Mirrors the Cassandra backend's semantics: identifier validation on
/// creation, existence checks on every dependent operation, idempotent
/// DDL. Data lives in nested maps behind an `Arc<RwLock<_>>` and is lost
/// when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    keyspaces: Arc<RwLock<HashMap<String, Keyspace>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The server-side failure for DML against a missing keyspace, phrased
/// like the real cluster phrases it.
fn keyspace_missing(keyspace: &str) -> StoreError {
    StoreError::Query(format!("Keyspace \"{keyspace}\" does not exist"))
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn keyspace_exists(&self, keyspace: &str) -> Result<bool> {
        Ok(self.keyspaces.read().await.contains_key(keyspace))
    }

    async fn table_exists(&self, keyspace: &str, table: &str) -> Result<bool> {
        let keyspaces = self.keyspaces.read().await;
        Ok(keyspaces
            .get(keyspace)
            .is_some_and(|tables| tables.contains_key(table)))
    }

    async fn create_keyspace(&self, keyspace: &str) -> Result<()> {
        validate_keyspace_name(keyspace)?;

        let mut keyspaces = self.keyspaces.write().await;
        keyspaces.entry(keyspace.to_string()).or_default();
        Ok(())
    }

    async fn delete_keyspace(&self, keyspace: &str) -> Result<()> {
        let mut keyspaces = self.keyspaces.write().await;
        keyspaces.remove(keyspace);
        Ok(())
    }

    async fn create_table(&self, keyspace: &str, table: &str) -> Result<()> {
        validate_keyspace_name(keyspace)?;
        validate_table_name(table)?;

        let mut keyspaces = self.keyspaces.write().await;
        let tables = keyspaces
            .get_mut(keyspace)
            .ok_or_else(|| keyspace_missing(keyspace))?;
        tables.entry(table.to_string()).or_default();
        Ok(())
    }

    async fn delete_table(&self, keyspace: &str, table: &str) -> Result<()> {
        let mut keyspaces = self.keyspaces.write().await;
        if let Some(tables) = keyspaces.get_mut(keyspace) {
            tables.remove(table);
        }
        Ok(())
    }

    async fn store(&self, keyspace: &str, table: &str, key: &str, value: &str) -> Result<()> {
        let mut keyspaces = self.keyspaces.write().await;
        let table = keyspaces
            .get_mut(keyspace)
            .and_then(|tables| tables.get_mut(table))
            .ok_or_else(|| StoreError::TableNotFound {
                table: table.to_string(),
            })?;

        table.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn fetch(&self, keyspace: &str, table: &str, key: &str) -> Result<String> {
        let keyspaces = self.keyspaces.read().await;
        let table = keyspaces
            .get(keyspace)
            .and_then(|tables| tables.get(table))
            .ok_or_else(|| StoreError::TableNotFound {
                table: table.to_string(),
            })?;

        table
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::KeyNotFound {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with_table(keyspace: &str, table: &str) -> InMemoryStore {
        let store = InMemoryStore::new();
        store.create_keyspace(keyspace).await.unwrap();
        store.create_table(keyspace, table).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_keyspace_is_visible_and_idempotent() {
        let store = InMemoryStore::new();

        assert!(!store.keyspace_exists("app").await.unwrap());

        store.create_keyspace("app").await.unwrap();
        assert!(store.keyspace_exists("app").await.unwrap());

        // Creating it again is a no-op, not an error.
        store.create_keyspace("app").await.unwrap();
        assert!(store.keyspace_exists("app").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_table_with_reserved_word_name() {
        let store = store_with_table("app", "table").await;

        assert!(store.table_exists("app", "table").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_table_rejects_invalid_name_before_any_change() {
        let store = InMemoryStore::new();
        store.create_keyspace("app").await.unwrap();

        let result = store.create_table("app", "5&@abc").await;

        assert_eq!(
            result,
            Err(StoreError::InvalidTableName {
                name: "5&@abc".to_string()
            })
        );
        assert!(!store.table_exists("app", "5&@abc").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_keyspace_rejects_invalid_name() {
        let store = InMemoryStore::new();

        let result = store.create_keyspace("5&@abc").await;

        assert_eq!(
            result,
            Err(StoreError::InvalidKeyspaceName {
                name: "5&@abc".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_create_table_in_missing_keyspace_fails() {
        let store = InMemoryStore::new();

        let result = store.create_table("nowhere", "users").await;

        assert_eq!(
            result,
            Err(StoreError::Query(
                "Keyspace \"nowhere\" does not exist".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_delete_keyspace_and_table_are_idempotent() {
        let store = store_with_table("app", "users").await;

        store.delete_table("app", "users").await.unwrap();
        store.delete_table("app", "users").await.unwrap();
        store.delete_table("app", "never_existed").await.unwrap();

        store.delete_keyspace("app").await.unwrap();
        store.delete_keyspace("app").await.unwrap();
        assert!(!store.keyspace_exists("app").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_keyspace_drops_its_tables() {
        let store = store_with_table("app", "users").await;

        store.delete_keyspace("app").await.unwrap();
        store.create_keyspace("app").await.unwrap();

        assert!(!store.table_exists("app", "users").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_and_fetch_round_trip() {
        let store = store_with_table("app", "users").await;

        store
            .store("app", "users", "stored_key", "stored_value")
            .await
            .unwrap();

        let value = store.fetch("app", "users", "stored_key").await.unwrap();
        assert_eq!(value, "stored_value");
    }

    #[tokio::test]
    async fn test_store_overwrites_existing_key() {
        let store = store_with_table("app", "users").await;

        store.store("app", "users", "key", "first").await.unwrap();
        store.store("app", "users", "key", "second").await.unwrap();

        let value = store.fetch("app", "users", "key").await.unwrap();
        assert_eq!(value, "second");
    }

    #[tokio::test]
    async fn test_store_and_fetch_fail_without_table() {
        let store = InMemoryStore::new();
        store.create_keyspace("app").await.unwrap();

        let expected = Err(StoreError::TableNotFound {
            table: "inexistent_table".to_string(),
        });

        assert_eq!(
            store.store("app", "inexistent_table", "key", "value").await,
            expected
        );
        assert_eq!(
            store.fetch("app", "inexistent_table", "key").await,
            expected.map(|_: ()| String::new())
        );
    }

    #[tokio::test]
    async fn test_fetch_missing_key_names_the_key() {
        let store = store_with_table("app", "users").await;

        let result = store.fetch("app", "users", "inexistent_key").await;

        assert_eq!(
            result,
            Err(StoreError::KeyNotFound {
                key: "inexistent_key".to_string()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "\"inexistent_key\" key not found"
        );
    }
}
