use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::bearer_token;
use crate::errors::AppError;
use crate::models::RoomRecord;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    match bearer_token(headers) {
        Some(token) if token == expected_token => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

// GET /api/admin/rooms
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<RoomRecord>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let rooms = state
        .rooms
        .fetch_all_rooms()
        .await
        .map_err(|e| AppError::Backend(format!("{e:#}")))?;
    Ok(Json(rooms))
}

// POST /api/admin/rooms/:id/availability
#[derive(Deserialize)]
pub struct AvailabilityRequest {
    pub available: bool,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    id: i64,
    available: bool,
}

pub async fn set_room_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let updated = state
        .rooms
        .set_availability(id, req.available)
        .await
        .map_err(|e| AppError::Backend(format!("{e:#}")))?;
    if !updated {
        return Err(AppError::NotFound(format!("room {id}")));
    }

    tracing::info!(room_id = id, available = req.available, "room availability changed");
    Ok(Json(AvailabilityResponse {
        id,
        available: req.available,
    }))
}
