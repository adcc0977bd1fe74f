//! HTTP handlers for the room conditions form

use axum::{extract::State, Json};
use shared::{validate_watering_interval, RoomConditions};

use crate::error::{AppError, AppResult};
use crate::services::SuggestionService;
use crate::AppState;

/// Submit room conditions.
///
/// Stores the submitted conditions and resets the suggestion state to
/// Idle so the next trigger runs against the fresh submission.
pub async fn submit_room(
    State(state): State<AppState>,
    Json(conditions): Json<RoomConditions>,
) -> AppResult<Json<RoomConditions>> {
    validate_watering_interval(conditions.max_watering_interval_days)
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    *state.room.write().await = Some(conditions.clone());

    let service = SuggestionService::new(state.suggestions.clone(), state.config.clone());
    service.reset().await;

    Ok(Json(conditions))
}

/// Current room conditions, if any have been submitted
pub async fn get_room(State(state): State<AppState>) -> AppResult<Json<Option<RoomConditions>>> {
    Ok(Json(state.room.read().await.clone()))
}
