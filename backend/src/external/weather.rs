//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather endpoint. Exactly five
//! fields are extracted from the provider response; anything missing on that
//! path is a shape mismatch and the whole fetch fails.

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use shared::{GpsCoordinates, WeatherSnapshot};

/// Bound on a single weather request. There are no retries, so this is also
/// the worst-case latency a caller can observe.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a fetch failed. Callers collapse all of these to one "unavailable"
/// signal; the distinction exists for diagnostics.
#[derive(Debug, Error)]
pub enum WeatherFetchError {
    #[error("request timed out")]
    Timeout,

    #[error("cannot connect to weather API: {0}")]
    Connection(reqwest::Error),

    #[error("weather API request failed: {0}")]
    Transport(reqwest::Error),

    #[error("weather API returned status {0}")]
    Status(StatusCode),

    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather.
///
/// Every field here is required; a response missing any of them fails to
/// deserialize and the fetch is reported as malformed.
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://api.openweathermap.org/data/2.5".to_string())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates.
    ///
    /// One request, bounded by [`REQUEST_TIMEOUT`], no retries.
    pub async fn fetch_current(
        &self,
        coordinates: GpsCoordinates,
    ) -> Result<WeatherSnapshot, WeatherFetchError> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coordinates.latitude, coordinates.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return Err(WeatherFetchError::Status(response.status()));
        }

        let data: OwmCurrentResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                WeatherFetchError::MalformedResponse(err.to_string())
            } else {
                classify_transport_error(err)
            }
        })?;

        let weather = data
            .weather
            .first()
            .ok_or_else(|| WeatherFetchError::MalformedResponse("weather array is empty".into()))?;

        Ok(WeatherSnapshot {
            location: coordinates,
            observed_at: Utc::now(),
            temperature_celsius: data.main.temp,
            humidity_percent: data.main.humidity,
            pressure_hpa: data.main.pressure,
            wind_speed_mps: data.wind.speed,
            description: weather.description.clone(),
        })
    }
}

fn classify_transport_error(err: reqwest::Error) -> WeatherFetchError {
    if err.is_timeout() {
        WeatherFetchError::Timeout
    } else if err.is_connect() {
        WeatherFetchError::Connection(err)
    } else {
        WeatherFetchError::Transport(err)
    }
}
