//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Fallback temperature used when no live weather is available.
pub const DEFAULT_TEMPERATURE_CELSIUS: f64 = 25.0;

/// Fallback humidity used when no live weather is available.
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 70.0;

/// A normalized weather reading at a point in time.
///
/// Produced per query and never persisted. All five provider fields are
/// required; a response missing any of them is reported as unavailable
/// instead of producing a partial snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: GpsCoordinates,
    pub observed_at: DateTime<Utc>,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub pressure_hpa: f64,
    pub wind_speed_mps: f64,
    pub description: String,
}

/// Result of a weather fetch.
///
/// Unavailability is an expected condition, not an error: credential absence,
/// transport failures, non-2xx statuses, and shape-mismatched responses all
/// collapse to `Unavailable`. The distinction between those causes lives in
/// the diagnostic logs only.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherOutcome {
    Available(WeatherSnapshot),
    Unavailable,
}

impl WeatherOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, WeatherOutcome::Available(_))
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            WeatherOutcome::Available(snapshot) => Some(snapshot),
            WeatherOutcome::Unavailable => None,
        }
    }

    pub fn into_snapshot(self) -> Option<WeatherSnapshot> {
        match self {
            WeatherOutcome::Available(snapshot) => Some(snapshot),
            WeatherOutcome::Unavailable => None,
        }
    }
}
