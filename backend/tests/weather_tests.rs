//! Weather adapter integration tests
//!
//! Drives the client against a local stub server to exercise each failure
//! class, and checks that the service collapses all of them into the single
//! `Unavailable` outcome.

use axum::{http::StatusCode, routing::get, Json, Router};

use crop_advisor_backend::external::weather::{WeatherClient, WeatherFetchError};
use crop_advisor_backend::services::WeatherService;
use shared::{GpsCoordinates, WeatherOutcome};

fn pune() -> GpsCoordinates {
    GpsCoordinates::new(18.52, 73.85)
}

/// Spawn a stub weather API and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{}", addr)
}

fn complete_payload() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 73.85, "lat": 18.52},
        "weather": [{"id": 721, "main": "Haze", "description": "haze", "icon": "50d"}],
        "main": {
            "temp": 27.9,
            "feels_like": 29.3,
            "temp_min": 27.9,
            "temp_max": 27.9,
            "pressure": 1009,
            "humidity": 66
        },
        "wind": {"speed": 4.2, "deg": 250},
        "name": "Pune"
    })
}

#[tokio::test]
async fn test_fetch_extracts_the_five_fields() {
    let router = Router::new().route(
        "/weather",
        get(|| async { Json(complete_payload()) }),
    );
    let base_url = spawn_stub(router).await;

    let client = WeatherClient::with_base_url("test-key".to_string(), base_url);
    let snapshot = client.fetch_current(pune()).await.expect("fetch succeeds");

    assert_eq!(snapshot.temperature_celsius, 27.9);
    assert_eq!(snapshot.humidity_percent, 66.0);
    assert_eq!(snapshot.pressure_hpa, 1009.0);
    assert_eq!(snapshot.wind_speed_mps, 4.2);
    assert_eq!(snapshot.description, "haze");
    assert_eq!(snapshot.location, pune());
}

#[tokio::test]
async fn test_server_error_status_is_distinguished_but_collapses() {
    let router = Router::new().route(
        "/weather",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_stub(router).await;

    // The client reports the exact failure class...
    let client = WeatherClient::with_base_url("test-key".to_string(), base_url.clone());
    let err = client.fetch_current(pune()).await.unwrap_err();
    match err {
        WeatherFetchError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Status error, got {:?}", other),
    }

    // ...and the service collapses it to Unavailable
    let service = WeatherService::new(Some(WeatherClient::with_base_url(
        "test-key".to_string(),
        base_url,
    )));
    assert_eq!(service.fetch_current(pune()).await, WeatherOutcome::Unavailable);
}

#[tokio::test]
async fn test_missing_field_in_response_is_unavailable() {
    // main.humidity is absent
    let router = Router::new().route(
        "/weather",
        get(|| async {
            Json(serde_json::json!({
                "weather": [{"description": "haze"}],
                "main": {"temp": 27.9, "pressure": 1009},
                "wind": {"speed": 4.2}
            }))
        }),
    );
    let base_url = spawn_stub(router).await;

    let client = WeatherClient::with_base_url("test-key".to_string(), base_url.clone());
    let err = client.fetch_current(pune()).await.unwrap_err();
    assert!(matches!(err, WeatherFetchError::MalformedResponse(_)));

    let service = WeatherService::new(Some(WeatherClient::with_base_url(
        "test-key".to_string(),
        base_url,
    )));
    assert_eq!(service.fetch_current(pune()).await, WeatherOutcome::Unavailable);
}

#[tokio::test]
async fn test_empty_weather_array_is_unavailable() {
    let router = Router::new().route(
        "/weather",
        get(|| async {
            Json(serde_json::json!({
                "weather": [],
                "main": {"temp": 27.9, "humidity": 66, "pressure": 1009},
                "wind": {"speed": 4.2}
            }))
        }),
    );
    let base_url = spawn_stub(router).await;

    let client = WeatherClient::with_base_url("test-key".to_string(), base_url);
    let err = client.fetch_current(pune()).await.unwrap_err();
    assert!(matches!(err, WeatherFetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_non_json_body_is_unavailable() {
    let router = Router::new().route("/weather", get(|| async { "<html>teapot</html>" }));
    let base_url = spawn_stub(router).await;

    let service = WeatherService::new(Some(WeatherClient::with_base_url(
        "test-key".to_string(),
        base_url,
    )));
    assert_eq!(service.fetch_current(pune()).await, WeatherOutcome::Unavailable);
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    // Bind a port, then free it so the connection is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);

    let client =
        WeatherClient::with_base_url("test-key".to_string(), format!("http://{}", addr));
    let err = client.fetch_current(pune()).await.unwrap_err();
    assert!(matches!(
        err,
        WeatherFetchError::Connection(_) | WeatherFetchError::Transport(_)
    ));

    let service = WeatherService::new(Some(WeatherClient::with_base_url(
        "test-key".to_string(),
        format!("http://{}", addr),
    )));
    assert_eq!(service.fetch_current(pune()).await, WeatherOutcome::Unavailable);
}

#[tokio::test]
async fn test_missing_credential_skips_the_network_entirely() {
    let service = WeatherService::new(None);
    assert!(!service.is_configured());
    // No stub server is running; the outcome comes from the credential check
    assert_eq!(service.fetch_current(pune()).await, WeatherOutcome::Unavailable);
}
