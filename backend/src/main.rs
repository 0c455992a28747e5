//! GWEN Backend
//!
//! REST backend for the GWEN voice assistant: spoken chat replies, time capsules,
//! location reminders and a static places catalog, all held in process memory.

mod api;
mod assistant;
mod catalog;
mod config;
mod errors;
mod geo;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use assistant::Assistant;
use catalog::{MockGeocoder, PlacesCatalog};
use config::Config;
use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub catalog: Arc<PlacesCatalog>,
    pub geocoder: MockGeocoder,
    pub assistant: Arc<Assistant>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting GWEN backend server");
    tracing::info!("OpenAI API key set: {}", config.openai_api_key.is_some());
    tracing::info!(
        "ElevenLabs API key set: {}",
        config.elevenlabs_api_key.is_some()
    );
    tracing::info!("GWEN voice ID set: {}", config.voice_id.is_some());
    tracing::info!("Store id policy: {:?}", config.id_policy);

    if config.openai_api_key.is_none() || !config.speech_configured() {
        tracing::warn!("Assistant providers are not fully configured. POST /gwen is disabled!");
    }

    // Load the places catalog
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading places catalog from {:?}", path);
            PlacesCatalog::load(path)?
        }
        None => PlacesCatalog::builtin(),
    };
    tracing::info!(
        "Places catalog ready with {} places in [{}]",
        catalog.place_count(),
        catalog.category_names().collect::<Vec<_>>().join(", ")
    );

    let assistant = Assistant::from_config(&config)?;

    // Create application state
    let state = AppState {
        repo: Arc::new(Repository::new(config.id_policy)),
        catalog: Arc::new(catalog),
        geocoder: MockGeocoder,
        assistant: Arc::new(assistant),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        // Assistant
        .route("/gwen", post(api::gwen))
        // Time capsules
        .route("/timecapsule", get(api::list_time_capsules))
        .route("/timecapsule", post(api::create_time_capsule))
        .route("/timecapsule/{id}", get(api::get_time_capsule))
        .route("/timecapsule/{id}", delete(api::delete_time_capsule))
        // Location reminders
        .route("/reminder/location", get(api::list_reminders))
        .route("/reminder/location", post(api::create_reminder))
        .route("/reminder/location/{id}", get(api::get_reminder))
        .route("/reminder/location/{id}", delete(api::delete_reminder))
        // Location
        .route("/location", get(api::current_location))
        .route("/location/update", post(api::update_location))
        // Places
        .route("/places/search", get(api::search_places))
        .route("/places/detail/{place_id}", get(api::place_detail))
        .route("/geocode", get(api::geocode))
        // Health check
        .route("/health", get(api::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
