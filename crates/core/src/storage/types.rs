use std::time::Duration;

/// Connection details for the external Cassandra cluster.
///
/// Supplied once at startup and owned by the backend; immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Node addresses to contact, `host` or `host:port`.
    pub nodes: Vec<String>,
    pub username: String,
    pub password: String,
    /// Timeout for establishing the session. The only timeout in the
    /// system; individual statements run without one.
    pub connect_timeout: Duration,
    /// Default keyspace carried by some service bindings. Operations take
    /// the keyspace per call, but the binding value is preserved here.
    pub keyspace: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            nodes: vec!["localhost".to_string()],
            username: "cassandra".to_string(),
            password: "cassandra".to_string(),
            connect_timeout: Duration::from_secs(10),
            keyspace: None,
        }
    }
}
