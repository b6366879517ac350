//! Share endpoint handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::share::{NewShare, ShareData, ShareRecord};

use super::super::{error::ApiError, state::AppState};

/// Response wrapper for share lookups.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub share_data: ShareData,
}

/// Response for a newly published share.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareResponse {
    pub share_id: String,
    pub share_data: ShareRecord,
}

/// Fetch a shared result.
#[instrument(skip(state), fields(date = %date, share_id = %share_id))]
pub async fn get_share(
    State(state): State<AppState>,
    Path((date, share_id)): Path<(String, String)>,
) -> Result<Json<ShareResponse>, ApiError> {
    debug!("loading share");

    let share_data = state.shares.get(&date, &share_id).await?;

    if share_data.is_fallback() {
        debug!("serving fallback share data");
    } else {
        info!("share loaded");
    }

    Ok(Json(ShareResponse { share_data }))
}

/// Publish a new shared result.
#[instrument(skip(state, new_share), fields(date = %new_share.date))]
pub async fn create_share(
    State(state): State<AppState>,
    Json(new_share): Json<NewShare>,
) -> Result<(StatusCode, Json<CreateShareResponse>), ApiError> {
    debug!("storing share");

    let created = state.shares.create(new_share).await?;

    info!(share_id = %created.share_id, "share created");

    Ok((
        StatusCode::CREATED,
        Json(CreateShareResponse {
            share_id: created.share_id,
            share_data: created.record,
        }),
    ))
}
