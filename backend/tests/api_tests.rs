//! HTTP surface integration tests
//!
//! Sends requests through the full router with an in-memory state: location
//! listings, coordinate lookups, degraded weather, and recommendations.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use ndarray::{Array1, Array2};
use tower::ServiceExt;

use crop_advisor_backend::config::{LocationDataConfig, ModelConfig, ServerConfig, WeatherConfig};
use crop_advisor_backend::model::CropClassifier;
use crop_advisor_backend::services::{LocationStore, WeatherService};
use crop_advisor_backend::{create_app, AppState, Config};
use shared::{LocationRecord, RecommendationRequest, FEATURE_COUNT};

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        locations: LocationDataConfig {
            csv_path: "unused-in-tests".to_string(),
        },
        model: ModelConfig {
            path: "unused-in-tests".to_string(),
        },
        weather: WeatherConfig {
            api_endpoint: "http://127.0.0.1:9".to_string(),
            api_key: "".to_string(),
        },
    }
}

fn test_state() -> AppState {
    let locations = LocationStore::from_records(vec![
        LocationRecord::new("Pune", "Maharashtra", "18.52, 73.85"),
        LocationRecord::new("Mumbai", "Maharashtra", "19.08, 72.88"),
        LocationRecord::new("Patna", "Bihar", "25.59, 85.14"),
    ]);

    let classes = vec!["rice".to_string(), "wheat".to_string()];
    let feature_means = Array1::from(vec![60.0, 60.0, 60.0, 25.0, 70.0, 6.5, 100.0]);
    let feature_stds = Array1::from(vec![1.0; FEATURE_COUNT]);
    let coefficients = Array2::from_shape_vec(
        (2, FEATURE_COUNT),
        vec![
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
    )
    .expect("coefficient shape");
    let intercepts = Array1::from(vec![1.0, 0.0]);
    let model = CropClassifier::new(classes, feature_means, feature_stds, coefficients, intercepts)
        .expect("consistent test classifier");

    AppState {
        config: Arc::new(test_config()),
        locations: Arc::new(locations),
        model: Arc::new(model),
        weather: WeatherService::new(None),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_app(test_state());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["locations_loaded"], 3);
    assert_eq!(body["crop_classes"], 2);
    assert_eq!(body["live_weather"], "disabled");
}

#[tokio::test]
async fn test_list_states_and_cities() {
    let app = create_app(test_state());

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/v1/locations/states")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!(["Bihar", "Maharashtra"])
    );

    let response = app
        .oneshot(
            Request::get("/api/v1/locations/states/Maharashtra/cities")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!(["Mumbai", "Pune"])
    );
}

#[tokio::test]
async fn test_unknown_state_is_404() {
    let app = create_app(test_state());

    let response = app
        .oneshot(
            Request::get("/api/v1/locations/states/Kerala/cities")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_city_coordinates_lookup_is_case_insensitive() {
    let app = create_app(test_state());

    let response = app
        .oneshot(
            Request::get("/api/v1/locations/cities/pune/coordinates")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["coordinates"]["latitude"], 18.52);
    assert_eq!(body["coordinates"]["longitude"], 73.85);
}

#[tokio::test]
async fn test_current_weather_degrades_without_credential() {
    let app = create_app(test_state());

    let response = app
        .oneshot(
            Request::get("/api/v1/weather/current?city=Pune")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    // Unavailability is a normal payload, not an HTTP error
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["available"], false);
    assert!(body.get("snapshot").is_none());
}

#[tokio::test]
async fn test_recommendation_round_trip() {
    let app = create_app(test_state());

    let request = RecommendationRequest {
        state: "Maharashtra".to_string(),
        city: "Pune".to_string(),
        nitrogen: 60.0,
        phosphorus: 60.0,
        potassium: 60.0,
        ph: 6.5,
        rainfall_mm: 100.0,
    };

    let response = app
        .oneshot(
            Request::post("/api/v1/recommendations")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&request).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["recommended_crop"], "rice");
    assert_eq!(body["used_default_weather"], true);
    assert_eq!(body["features"]["temperature_celsius"], 25.0);
    assert_eq!(body["features"]["humidity_percent"], 70.0);
}

#[tokio::test]
async fn test_recommendation_rejects_out_of_range_input() {
    let app = create_app(test_state());

    let request = RecommendationRequest {
        state: "Maharashtra".to_string(),
        city: "Pune".to_string(),
        nitrogen: 60.0,
        phosphorus: 60.0,
        potassium: 60.0,
        ph: 6.5,
        rainfall_mm: 500.0,
    };

    let response = app
        .oneshot(
            Request::post("/api/v1/recommendations")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&request).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "rainfall_mm");
}
