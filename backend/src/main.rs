//! Plant Care Assistant - Backend Server
//!
//! HTTP service behind the plant care web app: a static plant guide,
//! room-based plant suggestions via a generative AI collaborator, and an
//! in-session care reminder schedule.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::{ReminderStore, RoomConditions};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::reminder::SharedReminderStore;
use services::suggestion::{SharedSuggestionState, SuggestionState};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Fixed reference catalog, loaded once at startup
    pub catalog: Arc<Vec<shared::Plant>>,
    /// The session's care reminder collection
    pub reminders: SharedReminderStore,
    /// Most recently submitted room conditions
    pub room: Arc<RwLock<Option<RoomConditions>>>,
    /// Suggestion request state machine
    pub suggestions: SharedSuggestionState,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pca_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Plant Care Assistant Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the reference catalog
    let catalog = services::catalog::default_catalog();
    tracing::info!("Loaded plant catalog with {} entries", catalog.len());

    // Create application state
    let state = AppState {
        catalog: Arc::new(catalog),
        reminders: Arc::new(RwLock::new(ReminderStore::new())),
        room: Arc::new(RwLock::new(None)),
        suggestions: Arc::new(RwLock::new(SuggestionState::Idle)),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Plant Care Assistant API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
