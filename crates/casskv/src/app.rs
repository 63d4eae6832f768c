use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        keyspaces::{create_keyspace, delete_keyspace},
        records::{fetch_record, store_record},
        tables::{create_table, delete_table},
        AppError,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// The surface is the four key/value operations addressed entirely through
/// the path; request bodies are ignored and responses are plain text.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/{keyspace}", post(create_keyspace).delete(delete_keyspace))
        .route(
            "/{keyspace}/{table}",
            post(create_table).delete(delete_table),
        )
        .route("/{keyspace}/{table}/{key}", get(fetch_record))
        .route("/{keyspace}/{table}/{key}/{value}", post(store_record))
        .fallback(unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Requests outside the four operations still require a bound service
/// before falling through to 404.
async fn unmatched(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store()?;

    Ok(StatusCode::NOT_FOUND)
}
