//! API routes and handlers.

mod puzzle;
mod share;

use axum::{
    Router,
    routing::{get, post, put},
};

use super::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Share operations
        .route("/api/v1/share", post(share::create_share))
        .route("/api/v1/share/{date}/{share_id}", get(share::get_share))
        // Puzzle operations
        .route("/api/v1/puzzle/{date}", get(puzzle::get_puzzle))
        .route("/api/v1/puzzle/{date}", put(puzzle::put_puzzle))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
