//! HTTP handlers for the suggestion flow

use axum::{extract::State, Json};
use shared::SuggestedPlant;

use crate::error::{AppError, AppResult};
use crate::services::suggestion::SuggestionState;
use crate::services::SuggestionService;
use crate::AppState;

/// Trigger a suggestion request from the stored room conditions.
///
/// Fails with a user-input error when no conditions were submitted yet;
/// every other failure kind is reported by the suggestion service itself.
pub async fn request_suggestions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SuggestedPlant>>> {
    let conditions = state
        .room
        .read()
        .await
        .clone()
        .ok_or(AppError::MissingRoomConditions)?;

    let service = SuggestionService::new(state.suggestions.clone(), state.config.clone());
    let suggestions = service
        .request_suggestions(conditions, &state.catalog)
        .await?;

    Ok(Json(suggestions))
}

/// Snapshot of the suggestion request state machine
pub async fn get_suggestion_state(State(state): State<AppState>) -> Json<SuggestionState> {
    let service = SuggestionService::new(state.suggestions.clone(), state.config.clone());
    Json(service.snapshot().await)
}
