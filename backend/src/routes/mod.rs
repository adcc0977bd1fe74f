//! Route definitions for the Plant Care Assistant

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Plant guide (static reference catalog)
        .nest("/plants", plant_routes())
        // Room conditions form
        .nest("/room", room_routes())
        // Suggestion flow
        .nest("/suggestions", suggestion_routes())
        // Care reminder schedule
        .nest("/reminders", reminder_routes())
}

/// Plant guide routes
fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_plants))
        .route("/:plant_id", get(handlers::get_plant))
}

/// Room conditions routes
fn room_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::get_room).post(handlers::submit_room))
}

/// Suggestion flow routes
fn suggestion_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::get_suggestion_state).post(handlers::request_suggestions),
    )
}

/// Reminder schedule routes
fn reminder_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_reminders).post(handlers::create_reminder))
        .route("/:reminder_id", delete(handlers::delete_reminder))
        .route("/:reminder_id/complete", post(handlers::complete_reminder))
}
