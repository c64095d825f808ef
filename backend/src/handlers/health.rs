//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub locations_loaded: usize,
    pub crop_classes: usize,
    pub live_weather: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let live_weather = if state.weather.is_configured() {
        "configured".to_string()
    } else {
        "disabled".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        locations_loaded: state.locations.len(),
        crop_classes: state.model.classes().len(),
        live_weather,
    })
}
