//! Crop Advisor - Backend Server
//!
//! Recommends crops from soil parameters and live weather for Indian
//! states and cities.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_advisor_backend::model::CropClassifier;
use crop_advisor_backend::services::{LocationStore, WeatherService};
use crop_advisor_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "crop_advisor_server=debug,crop_advisor_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Crop Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the location dataset; a missing file or column is fatal
    tracing::info!("Loading location data from {}", config.locations.csv_path);
    let locations = LocationStore::from_csv_path(&config.locations.csv_path)
        .with_context(|| format!("loading location data from {}", config.locations.csv_path))?;
    tracing::info!(
        "Loaded {} locations across {} states",
        locations.len(),
        locations.states().len()
    );

    // Load the pre-trained classifier; a missing or corrupt artifact is fatal
    tracing::info!("Loading crop model from {}", config.model.path);
    let model = CropClassifier::load(&config.model.path)
        .with_context(|| format!("loading crop model from {}", config.model.path))?;
    tracing::info!("Model ready with {} crop classes", model.classes().len());

    // Live weather degrades to defaults when no API key is configured
    let weather = WeatherService::from_config(&config.weather);

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        locations: Arc::new(locations),
        model: Arc::new(model),
        weather,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
