//! Weather service
//!
//! Bridges the raw API client and the degraded-mode policy: every failure,
//! credential absence included, collapses to a single `Unavailable` outcome.
//! The individual failure classes stay visible in the logs.

use shared::{GpsCoordinates, WeatherOutcome};

use crate::config::WeatherConfig;
use crate::external::weather::{WeatherClient, WeatherFetchError};

/// Weather service holding an optional client.
///
/// Without a configured credential there is no client, and every fetch
/// reports `Unavailable` without touching the network.
#[derive(Clone)]
pub struct WeatherService {
    client: Option<WeatherClient>,
}

impl WeatherService {
    pub fn new(client: Option<WeatherClient>) -> Self {
        Self { client }
    }

    /// Build the service from configuration.
    pub fn from_config(config: &WeatherConfig) -> Self {
        let client = config
            .api_key()
            .map(|key| WeatherClient::with_base_url(key.to_string(), config.api_endpoint.clone()));
        if client.is_none() {
            tracing::warn!("weather API key not configured; live weather disabled");
        }
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Fetch current conditions for the given coordinates.
    ///
    /// Never fails: transport errors, bad statuses, and shape mismatches all
    /// come back as `WeatherOutcome::Unavailable`.
    pub async fn fetch_current(&self, coordinates: GpsCoordinates) -> WeatherOutcome {
        let Some(client) = &self.client else {
            tracing::warn!("weather fetch skipped: no API key configured");
            return WeatherOutcome::Unavailable;
        };

        match client.fetch_current(coordinates).await {
            Ok(snapshot) => WeatherOutcome::Available(snapshot),
            Err(err) => {
                match &err {
                    WeatherFetchError::Timeout => {
                        tracing::warn!("weather request timed out");
                    }
                    WeatherFetchError::Connection(source) => {
                        tracing::warn!(error = %source, "cannot connect to weather API");
                    }
                    WeatherFetchError::Transport(source) => {
                        tracing::warn!(error = %source, "weather request failed");
                    }
                    WeatherFetchError::Status(status) => {
                        tracing::warn!(%status, "weather API returned an error status");
                    }
                    WeatherFetchError::MalformedResponse(detail) => {
                        tracing::warn!(%detail, "weather response missing expected fields");
                    }
                }
                WeatherOutcome::Unavailable
            }
        }
    }
}
