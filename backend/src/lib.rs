//! Crop Advisor backend
//!
//! A decision-support service for farmers: given a state/city and soil
//! parameters, it fetches current weather and runs a pre-trained classifier
//! to recommend a crop with ranked probabilities.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::model::CropClassifier;
use crate::services::{LocationStore, WeatherService};

/// Application state shared across handlers.
///
/// The location store and model are loaded once at startup and shared
/// read-only; nothing mutates them afterwards, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub locations: Arc<LocationStore>,
    pub model: Arc<CropClassifier>,
    pub weather: WeatherService,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}
