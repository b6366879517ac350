//! Puzzle endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::puzzle::PuzzleData;

use super::super::{error::ApiError, state::AppState};

/// Response wrapper for puzzle lookups.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    pub puzzle_data: PuzzleData,
}

/// Fetch the puzzle for a date.
#[instrument(skip(state), fields(date = %date))]
pub async fn get_puzzle(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<PuzzleResponse>, ApiError> {
    debug!("loading puzzle");

    let puzzle_data = state.puzzles.get(&date).await?;

    if puzzle_data.is_fallback() {
        debug!("serving fallback puzzle data");
    } else {
        info!("puzzle loaded");
    }

    Ok(Json(PuzzleResponse { puzzle_data }))
}

/// Store the puzzle for a date.
#[instrument(skip(state, puzzle), fields(date = %date))]
pub async fn put_puzzle(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(puzzle): Json<Value>,
) -> Result<StatusCode, ApiError> {
    state.puzzles.put(&date, &puzzle).await?;

    info!("puzzle stored");

    Ok(StatusCode::NO_CONTENT)
}
