//! HTTP handlers for the care reminder schedule
//!
//! Reminder endpoints never return errors for malformed input: a rejected
//! submission answers with `null` and unknown ids are ignored.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::reminder::{CreateReminderInput, ReminderView};
use crate::services::ReminderService;
use crate::AppState;

/// List all reminders, soonest due first, with display urgency
pub async fn list_reminders(State(state): State<AppState>) -> AppResult<Json<Vec<ReminderView>>> {
    let service = ReminderService::new(state.reminders.clone());
    Ok(Json(service.list().await))
}

/// Add a care task. Answers `null` when the submission was ignored.
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(input): Json<CreateReminderInput>,
) -> AppResult<Json<Option<ReminderView>>> {
    let service = ReminderService::new(state.reminders.clone());
    Ok(Json(service.add(input).await))
}

/// Mark a task done, restarting its cycle from today. Answers `null` for
/// unknown ids.
pub async fn complete_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<i64>,
) -> AppResult<Json<Option<ReminderView>>> {
    let service = ReminderService::new(state.reminders.clone());
    Ok(Json(service.complete(reminder_id).await))
}

/// Delete a task. Unknown ids are ignored, never an error.
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<i64>,
) -> AppResult<Json<()>> {
    let service = ReminderService::new(state.reminders.clone());
    service.delete(reminder_id).await;
    Ok(Json(()))
}
