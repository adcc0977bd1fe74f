//! Reference catalog models

use serde::{Deserialize, Serialize};

/// A plant in the static reference catalog
///
/// Loaded once at startup from a fixed in-memory table and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub environment: String,
    pub water: String,
    pub sunlight: String,
    pub soil: String,
    pub benefits: String,
}
