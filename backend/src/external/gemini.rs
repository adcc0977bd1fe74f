//! Generative suggestion service client
//!
//! Client for the Gemini `generateContent` endpoint. Builds the plant
//! suggestion prompt from the room conditions and the reference catalog,
//! requests a structured JSON response, and validates the parsed result
//! against the suggestion contract. One call per user request; no caching,
//! no internal retry.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared::{validate_suggestions, Plant, RoomConditions, SuggestedPlant};

use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};

/// Client for the generative suggestion service
#[derive(Clone)]
pub struct GeminiClient {
    api_endpoint: String,
    api_key: String,
    model: String,
    http_client: Client,
}

/// Request body for the generateContent endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// Response envelope from the generateContent endpoint
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    /// Create a new suggestion service client
    pub fn new(api_endpoint: String, api_key: String, model: String) -> Self {
        Self {
            api_endpoint,
            api_key,
            model,
            http_client: Client::new(),
        }
    }

    /// Create a client from configuration, failing fast when no API key is
    /// set so that a missing credential never reaches the network.
    pub fn from_config(config: &GeminiConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "Gemini API key is not set".to_string(),
            ));
        }

        Ok(Self::new(
            config.api_endpoint.clone(),
            config.api_key.clone(),
            config.model.clone(),
        ))
    }

    /// Request the top 3 plant suggestions for the given room conditions.
    ///
    /// Returns exactly 3 suggestions drawn from `catalog`, or an error when
    /// the call or the response contract fails.
    pub async fn fetch_suggestions(
        &self,
        conditions: &RoomConditions,
        catalog: &[Plant],
    ) -> AppResult<Vec<SuggestedPlant>> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_endpoint, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(conditions, catalog),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: suggestion_response_schema(),
            },
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::SuggestionService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::SuggestionService(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::SchemaViolation(format!("Failed to parse response envelope: {}", e))
        })?;

        let suggestions = parse_payload(&extract_payload(&result)?)?;

        validate_suggestions(&suggestions, catalog)
            .map_err(|msg| AppError::SchemaViolation(msg.to_string()))?;

        Ok(suggestions)
    }
}

/// Combine the catalog and the room conditions into the suggestion prompt
fn build_prompt(conditions: &RoomConditions, catalog: &[Plant]) -> String {
    let plant_list = catalog
        .iter()
        .map(|p| {
            format!(
                "- {}: Sunlight={}, Water={}, Soil={}, Benefits={}",
                p.name, p.sunlight, p.water, p.soil, p.benefits
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let soil = conditions
        .soil
        .map(|s| s.to_string())
        .unwrap_or_else(|| "No preference".to_string());
    let fertilizer = match conditions.fertilizer_available {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => "No preference".to_string(),
    };
    let requirement = conditions
        .special_requirement
        .map(|r| r.to_string())
        .unwrap_or_else(|| "None".to_string());

    format!(
        "You are a helpful botanist assistant for a busy student. Based on the \
         following room conditions and the list of available plants, suggest the \
         3 best-matching low-maintenance plants.\n\n\
         List of available plants to choose from:\n{plant_list}\n\n\
         Please choose your 3 suggestions ONLY from the list above. Ensure they \
         are the best possible match for the user's conditions.\n\n\
         User's Conditions:\n\
         - Available Sunlight: {sunlight}\n\
         - Type of Soil Available: {soil}\n\
         - Fertilizer Available: {fertilizer}\n\
         - Important Requirement from user: {requirement}\n\
         - Maximum days between watering: {watering} days\n\
         - Available Space: {space}\n\n\
         For each of the 3 plants, provide:\n\
         1. Its common name (must be from the provided list).\n\
         2. A brief, encouraging description.\n\
         3. Simple care instructions for watering, sunlight, and fertilizer.\n\
         4. A short, one-sentence reasoning for why it's a good fit for these \
         specific conditions.\n\n\
         Return the response as a valid JSON array of 3 plant objects.",
        plant_list = plant_list,
        sunlight = conditions.sunlight,
        soil = soil,
        fertilizer = fertilizer,
        requirement = requirement,
        watering = conditions.max_watering_interval_days,
        space = conditions.space,
    )
}

/// Structured output schema requested from the service: an array of
/// four-field suggestion objects
fn suggestion_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "plantName": {
                    "type": "STRING",
                    "description": "The common name of the suggested plant."
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief, encouraging description of the plant."
                },
                "careInstructions": {
                    "type": "OBJECT",
                    "properties": {
                        "watering": { "type": "STRING" },
                        "sunlight": { "type": "STRING" },
                        "fertilizer": { "type": "STRING" }
                    },
                    "required": ["watering", "sunlight", "fertilizer"]
                },
                "reasoning": {
                    "type": "STRING",
                    "description": "A short reason why this plant is a good fit."
                }
            },
            "required": ["plantName", "description", "careInstructions", "reasoning"]
        }
    })
}

/// Pull the generated JSON text out of the response envelope
fn extract_payload(response: &GenerateContentResponse) -> AppResult<String> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| AppError::SchemaViolation("Response contains no candidates".to_string()))?;

    let text = candidate
        .content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<String>();

    Ok(text.trim().to_string())
}

/// Parse the generated text as the suggestion array.
///
/// serde rejects any object missing a required field, so presence checks
/// come for free here; count and catalog membership are checked separately.
fn parse_payload(text: &str) -> AppResult<Vec<SuggestedPlant>> {
    serde_json::from_str(text)
        .map_err(|e| AppError::SchemaViolation(format!("Failed to parse suggestions: {}", e)))
}
