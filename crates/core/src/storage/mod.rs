mod error;
mod identifier;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use identifier::{validate_keyspace_name, validate_table_name};
pub use traits::KeyValueStore;
pub use types::ConnectionConfig;
