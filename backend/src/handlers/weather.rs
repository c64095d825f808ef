//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use shared::WeatherSnapshot;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for a current-weather lookup
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherQuery {
    pub city: String,
}

/// Current weather for a city.
///
/// `available: false` is a normal response, not an HTTP error; the cause of
/// unavailability is visible only in the service logs.
#[derive(Debug, Serialize)]
pub struct CurrentWeatherResponse {
    pub city: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<WeatherSnapshot>,
}

/// Fetch current weather for a city
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<CurrentWeatherQuery>,
) -> AppResult<Json<CurrentWeatherResponse>> {
    let coordinates = state
        .locations
        .resolve_coordinates(&query.city)
        .ok_or_else(|| AppError::NotFound(format!("city '{}'", query.city)))?;

    let snapshot = state.weather.fetch_current(coordinates).await.into_snapshot();

    Ok(Json(CurrentWeatherResponse {
        city: query.city,
        available: snapshot.is_some(),
        snapshot,
    }))
}
