//! Route definitions for the Crop Advisor service

use axum::{routing::get, routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Location lookups
        .nest("/locations", location_routes())
        // Current weather
        .nest("/weather", weather_routes())
        // Crop recommendations
        .nest("/recommendations", recommendation_routes())
}

/// Location lookup routes
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(handlers::list_states))
        .route("/states/:state/cities", get(handlers::list_cities))
        .route("/cities/:city/coordinates", get(handlers::get_city_coordinates))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/current", get(handlers::current_weather))
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::recommend_crop))
}
