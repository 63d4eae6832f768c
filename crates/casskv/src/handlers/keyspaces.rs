use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::state::AppState;

use super::AppError;

/// Create a keyspace (POST /{keyspace}).
///
/// Idempotent: creating an existing keyspace is a no-op.
pub async fn create_keyspace(
    State(state): State<AppState>,
    Path(keyspace): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store()?.create_keyspace(&keyspace).await?;

    tracing::info!(keyspace = %keyspace, "created keyspace");

    Ok(StatusCode::OK)
}

/// Delete a keyspace (DELETE /{keyspace}).
///
/// Idempotent: deleting an absent keyspace is a no-op.
pub async fn delete_keyspace(
    State(state): State<AppState>,
    Path(keyspace): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store()?.delete_keyspace(&keyspace).await?;

    tracing::info!(keyspace = %keyspace, "deleted keyspace");

    Ok(StatusCode::OK)
}
