//! Recommendation orchestration
//!
//! One request drives one sequential chain: validate soil inputs, resolve the
//! city to coordinates, fetch current weather, assemble the feature vector,
//! run the classifier. Lookup misses and weather unavailability degrade to
//! documented defaults; only structural problems become errors.

use std::sync::Arc;

use shared::{
    validate_soil_inputs, FeatureVector, RecommendationReport, RecommendationRequest,
    WeatherOutcome, DEFAULT_HUMIDITY_PERCENT, DEFAULT_TEMPERATURE_CELSIUS,
};

use crate::error::{AppError, AppResult};
use crate::model::CropClassifier;
use crate::services::{LocationStore, WeatherService};

/// How many ranked crops a report carries.
pub const TOP_PREDICTIONS: usize = 5;

/// Crop recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    locations: Arc<LocationStore>,
    model: Arc<CropClassifier>,
    weather: WeatherService,
}

impl RecommendationService {
    pub fn new(
        locations: Arc<LocationStore>,
        model: Arc<CropClassifier>,
        weather: WeatherService,
    ) -> Self {
        Self {
            locations,
            model,
            weather,
        }
    }

    /// Produce a crop recommendation report.
    ///
    /// An unresolvable city or unavailable weather is not an error: the
    /// report falls back to 25.0 °C / 70 % humidity and says so. Soil inputs
    /// outside the trained ranges are rejected before any I/O happens.
    pub async fn recommend(&self, request: RecommendationRequest) -> AppResult<RecommendationReport> {
        validate_soil_inputs(
            request.nitrogen,
            request.phosphorus,
            request.potassium,
            request.ph,
            request.rainfall_mm,
        )
        .map_err(|err| AppError::Validation {
            field: err.field.to_string(),
            message: err.message.to_string(),
        })?;

        let outcome = match self.locations.resolve_coordinates(&request.city) {
            Some(coordinates) => self.weather.fetch_current(coordinates).await,
            None => {
                tracing::warn!(city = %request.city, "no coordinates for city; using default weather");
                WeatherOutcome::Unavailable
            }
        };

        let weather = outcome.into_snapshot();
        let used_default_weather = weather.is_none();
        let (temperature_celsius, humidity_percent) = weather
            .as_ref()
            .map(|snapshot| (snapshot.temperature_celsius, snapshot.humidity_percent))
            .unwrap_or((DEFAULT_TEMPERATURE_CELSIUS, DEFAULT_HUMIDITY_PERCENT));

        let features = FeatureVector::new(
            request.nitrogen,
            request.phosphorus,
            request.potassium,
            temperature_celsius,
            humidity_percent,
            request.ph,
            request.rainfall_mm,
        );

        let recommended_crop = self.model.predict(&features).to_string();
        let top_predictions = self.model.rank_probabilities(&features, TOP_PREDICTIONS);

        tracing::info!(
            city = %request.city,
            crop = %recommended_crop,
            used_default_weather,
            "crop recommendation produced"
        );

        Ok(RecommendationReport {
            state: request.state,
            city: request.city,
            recommended_crop,
            top_predictions,
            weather,
            used_default_weather,
            features,
        })
    }
}
