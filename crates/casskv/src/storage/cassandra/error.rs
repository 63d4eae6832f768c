//! Driver error mapping.
//!
//! Maps `scylla` driver errors to `StoreError` from `casskv_core::storage`.

use casskv_core::storage::StoreError;
use scylla::errors::{ExecutionError, NewSessionError, PrepareError};

/// Map a session-establishment error to `StoreError`.
///
/// Authentication rejections surface at varying depths of the driver's
/// error chain depending on transport state, so classification falls back
/// to the rendered message. Everything else at this boundary means the
/// cluster could not be reached, including the connection timeout.
pub fn map_session_error(err: NewSessionError) -> StoreError {
    let text = err.to_string();
    if is_authentication_failure(&text) {
        StoreError::InvalidCredentials(text)
    } else {
        StoreError::Unavailable(text)
    }
}

/// Map a statement-preparation error to `StoreError`.
pub fn map_prepare_error(err: PrepareError) -> StoreError {
    StoreError::Query(err.to_string())
}

/// Map a statement-execution error to `StoreError`.
pub fn map_execution_error(err: ExecutionError) -> StoreError {
    StoreError::Query(err.to_string())
}

/// Map a result-conversion error (rows extraction, row typing) to `StoreError`.
pub fn map_rows_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::Query(err.to_string())
}

fn is_authentication_failure(text: &str) -> bool {
    let text = text.to_ascii_lowercase();
    text.contains("authentication") || text.contains("credentials")
}
