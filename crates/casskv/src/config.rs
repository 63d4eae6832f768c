use std::{env, time::Duration};

use casskv_core::storage::ConnectionConfig;

/// Application configuration loaded from environment variables.
///
/// Connection details come from the environment, with `CASSANDRA_NODES`
/// marking the service as bound. Until it is set, the server starts but
/// rejects every request with provisioning instructions.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection details for the bound Cassandra instance, `None` while
    /// the service is unbound.
    pub cassandra: Option<ConnectionConfig>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CASSANDRA_NODES` - comma-separated node addresses; absence means unbound
    /// - `CASSANDRA_USERNAME` - username (default: "cassandra")
    /// - `CASSANDRA_PASSWORD` - password (default: "cassandra")
    /// - `CASSANDRA_CONNECT_TIMEOUT_SECS` - session establishment timeout (default: 10)
    /// - `CASSANDRA_KEYSPACE` - optional default keyspace from the binding
    pub fn from_env() -> Self {
        let nodes = match env::var("CASSANDRA_NODES") {
            Ok(nodes) => nodes,
            Err(_) => return Self { cassandra: None },
        };

        let defaults = ConnectionConfig::default();

        let nodes: Vec<String> = nodes
            .split(',')
            .map(|node| node.trim().to_string())
            .filter(|node| !node.is_empty())
            .collect();

        let connect_timeout = env::var("CASSANDRA_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout);

        Self {
            cassandra: Some(ConnectionConfig {
                nodes: if nodes.is_empty() { defaults.nodes } else { nodes },
                username: env::var("CASSANDRA_USERNAME").unwrap_or(defaults.username),
                password: env::var("CASSANDRA_PASSWORD").unwrap_or(defaults.password),
                connect_timeout,
                keyspace: env::var("CASSANDRA_KEYSPACE").ok(),
            }),
        }
    }
}
