use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::state::AppState;

use super::AppError;

/// Store a value under a key (POST /{keyspace}/{table}/{key}/{value}).
///
/// Upsert semantics: storing to an existing key overwrites its value.
pub async fn store_record(
    State(state): State<AppState>,
    Path((keyspace, table, key, value)): Path<(String, String, String, String)>,
) -> Result<StatusCode, AppError> {
    state.store()?.store(&keyspace, &table, &key, &value).await?;

    tracing::debug!(keyspace = %keyspace, table = %table, key = %key, "stored record");

    Ok(StatusCode::CREATED)
}

/// Fetch the value stored under a key (GET /{keyspace}/{table}/{key}).
///
/// The stored value is the whole response body.
pub async fn fetch_record(
    State(state): State<AppState>,
    Path((keyspace, table, key)): Path<(String, String, String)>,
) -> Result<String, AppError> {
    let value = state.store()?.fetch(&keyspace, &table, &key).await?;

    Ok(value)
}
