use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::state::AppState;

use super::AppError;

/// Create a table (POST /{keyspace}/{table}).
///
/// Idempotent: creating an existing table is a no-op.
pub async fn create_table(
    State(state): State<AppState>,
    Path((keyspace, table)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    state.store()?.create_table(&keyspace, &table).await?;

    tracing::info!(keyspace = %keyspace, table = %table, "created table");

    Ok(StatusCode::OK)
}

/// Delete a table (DELETE /{keyspace}/{table}).
///
/// Idempotent: deleting an absent table is a no-op.
pub async fn delete_table(
    State(state): State<AppState>,
    Path((keyspace, table)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    state.store()?.delete_table(&keyspace, &table).await?;

    tracing::info!(keyspace = %keyspace, table = %table, "deleted table");

    Ok(StatusCode::OK)
}
