//! Static plant catalog service
//!
//! The catalog is fixed reference data, built once at startup and never
//! mutated. It backs the plant guide pages and bounds the answer set of
//! the suggestion flow.

use std::sync::Arc;

use shared::Plant;

use crate::error::{AppError, AppResult};

/// Read-only access to the reference catalog
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Vec<Plant>>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Vec<Plant>>) -> Self {
        Self { catalog }
    }

    /// All catalog plants, in fixed catalog order
    pub fn list(&self) -> Vec<Plant> {
        self.catalog.as_ref().clone()
    }

    /// Look up a single plant by id
    pub fn get(&self, id: i64) -> AppResult<Plant> {
        self.catalog
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Plant".to_string()))
    }
}

/// The built-in reference catalog
pub fn default_catalog() -> Vec<Plant> {
    fn plant(
        id: i64,
        name: &str,
        image: &str,
        environment: &str,
        water: &str,
        sunlight: &str,
        soil: &str,
        benefits: &str,
    ) -> Plant {
        Plant {
            id,
            name: name.to_string(),
            image_url: format!("/assets/plants/{}.jpg", image),
            environment: environment.to_string(),
            water: water.to_string(),
            sunlight: sunlight.to_string(),
            soil: soil.to_string(),
            benefits: benefits.to_string(),
        }
    }

    vec![
        plant(
            1,
            "Snake Plant",
            "snake-plant",
            "Indoor; tolerates dry air and neglect",
            "Every 2-3 weeks, let soil dry out fully",
            "Low to bright indirect",
            "Well-drained",
            "Air purifying, extremely low maintenance",
        ),
        plant(
            2,
            "Golden Pothos",
            "golden-pothos",
            "Indoor trailing vine, shelves and baskets",
            "Weekly, when the topsoil feels dry",
            "Low to bright indirect",
            "Well-drained",
            "Air purifying, great for hanging baskets",
        ),
        plant(
            3,
            "ZZ Plant",
            "zz-plant",
            "Indoor; handles dim corners",
            "Every 2-3 weeks",
            "Low to bright indirect",
            "Well-drained",
            "Thrives on neglect, glossy foliage",
        ),
        plant(
            4,
            "Spider Plant",
            "spider-plant",
            "Indoor; windowsills and hanging pots",
            "Weekly",
            "Bright indirect",
            "Well-drained",
            "Air purifying, pet friendly, produces plantlets",
        ),
        plant(
            5,
            "Peace Lily",
            "peace-lily",
            "Indoor; likes steady warmth",
            "Weekly, droops visibly when thirsty",
            "Low to bright indirect",
            "Moist",
            "Air purifying, elegant white blooms",
        ),
        plant(
            6,
            "Aloe Vera",
            "aloe-vera",
            "Sunny windowsill",
            "Every 3 weeks, sparingly in winter",
            "Direct",
            "Sandy",
            "Soothing gel, drought tolerant",
        ),
        plant(
            7,
            "Calathea",
            "calathea",
            "Indoor; loves humidity, away from drafts",
            "Weekly, keep soil lightly moist",
            "Low to medium indirect",
            "Moist",
            "Striking patterned leaves, pet friendly",
        ),
        plant(
            8,
            "Monstera",
            "monstera",
            "Indoor; needs room to spread",
            "Every 1-2 weeks",
            "Bright indirect",
            "Well-drained",
            "Statement split foliage, fast growing",
        ),
    ]
}
