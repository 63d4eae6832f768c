//! Cassandra-backed `KeyValueStore` implementation.

use std::sync::Arc;

use async_trait::async_trait;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use tokio::sync::OnceCell;

use casskv_core::storage::{
    validate_keyspace_name, validate_table_name, ConnectionConfig, KeyValueStore, Result,
    StoreError,
};

use super::error::{map_execution_error, map_prepare_error, map_rows_error, map_session_error};

/// Cassandra storage backend.
///
/// Holds the connection details and a lazily-created, memoized session.
/// The session is built on first use and shared by every subsequent call;
/// a failed attempt is not memoized, so the next call retries. The handle
/// is never explicitly closed.
///
/// Schema-object identifiers cannot be bound as statement parameters, so
/// DDL and DML interpolate them double-quoted; every interpolated name has
/// either passed [`validate_keyspace_name`]/[`validate_table_name`] or
/// been found in the system catalog by a bound query first.
pub struct CassandraStore {
    config: ConnectionConfig,
    session: OnceCell<Arc<Session>>,
}

impl CassandraStore {
    /// Creates a backend from connection details. No connection is made
    /// until the first operation.
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            session: OnceCell::new(),
        }
    }

    /// The memoized session, connecting on first use.
    async fn session(&self) -> Result<&Arc<Session>> {
        self.session
            .get_or_try_init(|| async {
                tracing::debug!(nodes = ?self.config.nodes, "connecting to Cassandra");

                let session = SessionBuilder::new()
                    .known_nodes(&self.config.nodes)
                    .user(&self.config.username, &self.config.password)
                    .connection_timeout(self.config.connect_timeout)
                    .build()
                    .await
                    .map_err(map_session_error)?;

                Ok(Arc::new(session))
            })
            .await
    }

    async fn ensure_table_exists(&self, keyspace: &str, table: &str) -> Result<()> {
        if self.table_exists(keyspace, table).await? {
            Ok(())
        } else {
            Err(StoreError::TableNotFound {
                table: table.to_string(),
            })
        }
    }
}

#[async_trait]
impl KeyValueStore for CassandraStore {
    async fn keyspace_exists(&self, keyspace: &str) -> Result<bool> {
        let session = self.session().await?;

        let prepared = session
            .prepare("SELECT keyspace_name FROM system_schema.keyspaces WHERE keyspace_name = ?")
            .await
            .map_err(map_prepare_error)?;
        let result = session
            .execute_unpaged(&prepared, (keyspace,))
            .await
            .map_err(map_execution_error)?;

        let rows = result.into_rows_result().map_err(map_rows_error)?;
        Ok(rows.rows_num() > 0)
    }

    async fn table_exists(&self, keyspace: &str, table: &str) -> Result<bool> {
        let session = self.session().await?;

        let prepared = session
            .prepare(
                "SELECT table_name FROM system_schema.tables \
                 WHERE keyspace_name = ? AND table_name = ?",
            )
            .await
            .map_err(map_prepare_error)?;
        let result = session
            .execute_unpaged(&prepared, (keyspace, table))
            .await
            .map_err(map_execution_error)?;

        let rows = result.into_rows_result().map_err(map_rows_error)?;
        Ok(rows.rows_num() > 0)
    }

    async fn create_keyspace(&self, keyspace: &str) -> Result<()> {
        validate_keyspace_name(keyspace)?;

        if self.keyspace_exists(keyspace).await? {
            return Ok(());
        }

        let session = self.session().await?;
        let ddl = format!(
            "CREATE KEYSPACE \"{keyspace}\" WITH REPLICATION = \
             {{'class': 'SimpleStrategy', 'replication_factor': 1}}"
        );
        session
            .query_unpaged(ddl, ())
            .await
            .map_err(map_execution_error)?;

        Ok(())
    }

    async fn delete_keyspace(&self, keyspace: &str) -> Result<()> {
        if !self.keyspace_exists(keyspace).await? {
            return Ok(());
        }

        let session = self.session().await?;
        let ddl = format!("DROP KEYSPACE \"{keyspace}\"");
        session
            .query_unpaged(ddl, ())
            .await
            .map_err(map_execution_error)?;

        Ok(())
    }

    async fn create_table(&self, keyspace: &str, table: &str) -> Result<()> {
        validate_keyspace_name(keyspace)?;
        validate_table_name(table)?;

        if self.table_exists(keyspace, table).await? {
            return Ok(());
        }

        let session = self.session().await?;
        let ddl = format!(
            "CREATE TABLE \"{keyspace}\".\"{table}\" (id varchar PRIMARY KEY, value varchar)"
        );
        session
            .query_unpaged(ddl, ())
            .await
            .map_err(map_execution_error)?;

        Ok(())
    }

    async fn delete_table(&self, keyspace: &str, table: &str) -> Result<()> {
        if !self.table_exists(keyspace, table).await? {
            return Ok(());
        }

        let session = self.session().await?;
        let ddl = format!("DROP TABLE \"{keyspace}\".\"{table}\"");
        session
            .query_unpaged(ddl, ())
            .await
            .map_err(map_execution_error)?;

        Ok(())
    }

    async fn store(&self, keyspace: &str, table: &str, key: &str, value: &str) -> Result<()> {
        self.ensure_table_exists(keyspace, table).await?;

        let session = self.session().await?;
        let insert = format!("INSERT INTO \"{keyspace}\".\"{table}\" (id, value) VALUES (?, ?)");
        let prepared = session.prepare(insert).await.map_err(map_prepare_error)?;
        session
            .execute_unpaged(&prepared, (key, value))
            .await
            .map_err(map_execution_error)?;

        Ok(())
    }

    async fn fetch(&self, keyspace: &str, table: &str, key: &str) -> Result<String> {
        self.ensure_table_exists(keyspace, table).await?;

        let session = self.session().await?;
        let select = format!("SELECT value FROM \"{keyspace}\".\"{table}\" WHERE id = ?");
        let prepared = session.prepare(select).await.map_err(map_prepare_error)?;
        let result = session
            .execute_unpaged(&prepared, (key,))
            .await
            .map_err(map_execution_error)?;

        let rows = result.into_rows_result().map_err(map_rows_error)?;
        let row = rows
            .maybe_first_row::<(Option<String>,)>()
            .map_err(map_rows_error)?;

        match row {
            // A null value column is possible via out-of-band writes;
            // it renders as an empty value.
            Some((value,)) => Ok(value.unwrap_or_default()),
            None => Err(StoreError::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }
}
