//! Suggestion models
//!
//! These types mirror the JSON contract with the generative suggestion
//! service, so the wire names are camelCase. Every field is required; a
//! response missing one fails deserialization and is treated as a schema
//! violation by the caller.

use serde::{Deserialize, Serialize};

/// Care guidance attached to a suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareInstructions {
    pub watering: String,
    pub sunlight: String,
    pub fertilizer: String,
}

/// A plant suggested by the generative service
///
/// `plant_name` must name a plant from the reference catalog; the caller
/// validates this after parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPlant {
    pub plant_name: String,
    pub description: String,
    pub care_instructions: CareInstructions,
    pub reasoning: String,
}
