//! Suggestion flow service and request state machine
//!
//! Holds the per-visit suggestion request state in an explicit shared
//! container: `Idle -> Loading -> Success | Failed`. Success and Failed
//! are terminal until the flow is re-triggered, which restarts at Loading.
//! Exactly one service call is made per trigger; failures are never
//! retried internally.

use std::sync::Arc;

use serde::Serialize;
use shared::{Plant, RoomConditions, SuggestedPlant};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::AppResult;
use crate::external::GeminiClient;

/// User-facing message shown for any failed suggestion request
const FAILURE_MESSAGE: &str =
    "Sorry, we couldn't fetch suggestions at this time. Please try again later.";

/// State of the current suggestion request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SuggestionState {
    Idle,
    Loading,
    Success {
        conditions: RoomConditions,
        suggestions: Vec<SuggestedPlant>,
    },
    Failed {
        message: String,
    },
}

/// Shared handle to the suggestion request state
pub type SharedSuggestionState = Arc<RwLock<SuggestionState>>;

/// Service driving the suggestion request flow
#[derive(Clone)]
pub struct SuggestionService {
    state: SharedSuggestionState,
    config: Arc<Config>,
}

impl SuggestionService {
    pub fn new(state: SharedSuggestionState, config: Arc<Config>) -> Self {
        Self { state, config }
    }

    /// Current state machine snapshot
    pub async fn snapshot(&self) -> SuggestionState {
        self.state.read().await.clone()
    }

    /// Reset to Idle; called when fresh room conditions are submitted
    pub async fn reset(&self) {
        *self.state.write().await = SuggestionState::Idle;
    }

    /// Run one suggestion request for the given conditions.
    ///
    /// Transitions to Loading immediately, then to Success or Failed.
    /// Every failure kind (configuration, transport, schema) lands in the
    /// same Failed state with one user-facing message; the returned error
    /// carries the detail.
    pub async fn request_suggestions(
        &self,
        conditions: RoomConditions,
        catalog: &[Plant],
    ) -> AppResult<Vec<SuggestedPlant>> {
        *self.state.write().await = SuggestionState::Loading;

        let result = self.fetch(&conditions, catalog).await;

        match &result {
            Ok(suggestions) => {
                tracing::info!("Suggestion request succeeded with {} plants", suggestions.len());
                *self.state.write().await = SuggestionState::Success {
                    conditions,
                    suggestions: suggestions.clone(),
                };
            }
            Err(e) => {
                tracing::warn!("Suggestion request failed: {}", e);
                *self.state.write().await = SuggestionState::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                };
            }
        }

        result
    }

    async fn fetch(
        &self,
        conditions: &RoomConditions,
        catalog: &[Plant],
    ) -> AppResult<Vec<SuggestedPlant>> {
        // Credential check happens here, before any network attempt
        let client = GeminiClient::from_config(&self.config.gemini)?;
        client.fetch_suggestions(conditions, catalog).await
    }
}
