//! Crop recommendation models

use serde::{Deserialize, Serialize};

use crate::models::WeatherSnapshot;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 7;

/// The ordered feature tuple consumed by the crop classifier.
///
/// The field order of [`FeatureVector::to_array`] is a hard contract with the
/// model artifact: (N, P, K, temperature, humidity, pH, rainfall). Reordering
/// silently corrupts predictions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
}

impl FeatureVector {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature_celsius: f64,
        humidity_percent: f64,
        ph: f64,
        rainfall_mm: f64,
    ) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature_celsius,
            humidity_percent,
            ph,
            rainfall_mm,
        }
    }

    /// Features in training order: N, P, K, temperature, humidity, pH, rainfall.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature_celsius,
            self.humidity_percent,
            self.ph,
            self.rainfall_mm,
        ]
    }
}

/// One crop with its predicted probability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropScore {
    pub crop: String,
    pub probability: f64,
}

/// Input for a crop recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub state: String,
    pub city: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
}

/// Result of a crop recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub state: String,
    pub city: String,
    /// Label as stored in the model artifact; display layers may uppercase.
    pub recommended_crop: String,
    pub top_predictions: Vec<CropScore>,
    /// Live snapshot when the fetch succeeded, `None` when defaults were used.
    pub weather: Option<WeatherSnapshot>,
    pub used_default_weather: bool,
    pub features: FeatureVector,
}
