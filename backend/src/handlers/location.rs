//! HTTP handlers for location lookup endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// List all states present in the location dataset
pub async fn list_states(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.locations.states())
}

/// List the cities under a state
pub async fn list_cities(
    State(state): State<AppState>,
    Path(state_name): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let cities = state
        .locations
        .cities_in_state(&state_name)
        .ok_or_else(|| AppError::NotFound(format!("state '{}'", state_name)))?;
    Ok(Json(cities))
}

/// Coordinates for a city
#[derive(Debug, Serialize)]
pub struct CoordinatesResponse {
    pub city: String,
    pub coordinates: GpsCoordinates,
}

/// Resolve a city (case-insensitive) to its coordinates
pub async fn get_city_coordinates(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<CoordinatesResponse>> {
    let coordinates = state
        .locations
        .resolve_coordinates(&city)
        .ok_or_else(|| AppError::NotFound(format!("city '{}'", city)))?;
    Ok(Json(CoordinatesResponse { city, coordinates }))
}
