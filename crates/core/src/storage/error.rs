use thiserror::Error;

/// Errors that can occur in the key/value access layer.
///
/// The display texts are part of the service contract: the HTTP façade
/// propagates them verbatim as response bodies, so tests assert on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid Cassandra credentials: {0}")]
    InvalidCredentials(String),
    #[error("Cassandra is not available: {0}")]
    Unavailable(String),
    #[error("Invalid keyspace name: \"{name}\"")]
    InvalidKeyspaceName { name: String },
    #[error("Invalid table name: \"{name}\"")]
    InvalidTableName { name: String },
    #[error("Table \"{table}\" does not exist")]
    TableNotFound { table: String },
    #[error("\"{key}\" key not found")]
    KeyNotFound { key: String },
    #[error("Query failed: {0}")]
    Query(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_display() {
        let error = StoreError::InvalidCredentials("bad username/password".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid Cassandra credentials: bad username/password"
        );
    }

    #[test]
    fn test_unavailable_display() {
        let error = StoreError::Unavailable("no hosts reachable".to_string());
        assert_eq!(
            error.to_string(),
            "Cassandra is not available: no hosts reachable"
        );
    }

    #[test]
    fn test_invalid_keyspace_name_display() {
        let error = StoreError::InvalidKeyspaceName {
            name: "5&@abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid keyspace name: \"5&@abc\"");
    }

    #[test]
    fn test_invalid_table_name_display() {
        let error = StoreError::InvalidTableName {
            name: "no-dashes".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid table name: \"no-dashes\"");
    }

    #[test]
    fn test_table_not_found_display() {
        let error = StoreError::TableNotFound {
            table: "inexistent_table".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table \"inexistent_table\" does not exist"
        );
    }

    #[test]
    fn test_key_not_found_display() {
        let error = StoreError::KeyNotFound {
            key: "inexistent_key".to_string(),
        };
        assert_eq!(error.to_string(), "\"inexistent_key\" key not found");
    }

    #[test]
    fn test_query_display() {
        let error = StoreError::Query("unconfigured table".to_string());
        assert_eq!(error.to_string(), "Query failed: unconfigured table");
    }
}
