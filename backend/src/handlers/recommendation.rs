//! HTTP handlers for crop recommendation endpoints

use axum::{extract::State, Json};

use shared::{RecommendationReport, RecommendationRequest};

use crate::error::AppResult;
use crate::services::RecommendationService;
use crate::AppState;

/// Produce a crop recommendation from location and soil inputs
pub async fn recommend_crop(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationReport>> {
    let service = RecommendationService::new(
        state.locations.clone(),
        state.model.clone(),
        state.weather.clone(),
    );
    let report = service.recommend(request).await?;
    Ok(Json(report))
}
