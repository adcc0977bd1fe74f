//! HTTP handlers for the plant guide endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::Plant;

use crate::error::AppResult;
use crate::services::CatalogService;
use crate::AppState;

/// List the full reference catalog
pub async fn list_plants(State(state): State<AppState>) -> AppResult<Json<Vec<Plant>>> {
    let service = CatalogService::new(state.catalog.clone());
    Ok(Json(service.list()))
}

/// Get a single catalog plant by id
pub async fn get_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<i64>,
) -> AppResult<Json<Plant>> {
    let service = CatalogService::new(state.catalog.clone());
    let plant = service.get(plant_id)?;
    Ok(Json(plant))
}
