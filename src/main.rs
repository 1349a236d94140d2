//! Villa API Backend
//!
//! A REST backend for villa records, persisted in SQLite or held in memory.

mod api;
mod config;
mod controller;
mod db;
mod errors;
mod mapping;
mod models;
mod patch;
mod store;
mod validation;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat, StoreKind};
use controller::VillaController;
use db::SqliteVillaStore;
use store::{InMemoryVillaStore, VillaStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub villas: VillaController,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with((config.log_format == LogFormat::Text).then(|| tracing_subscriber::fmt::layer()))
        .with(
            (config.log_format == LogFormat::Json).then(|| tracing_subscriber::fmt::layer().json()),
        )
        .init();

    tracing::info!("Starting Villa API Backend");
    tracing::info!("Store: {:?}", config.store);
    tracing::info!("Bind address: {}", config.bind_addr);

    let store: Arc<dyn VillaStore> = match config.store {
        StoreKind::Sqlite => {
            tracing::info!("Database path: {:?}", config.db_path);
            let pool = db::init_database(&config.db_path).await?;
            Arc::new(SqliteVillaStore::new(pool))
        }
        StoreKind::Memory => Arc::new(InMemoryVillaStore::seeded()),
    };

    let state = AppState {
        villas: VillaController::new(store),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/villas", get(api::list_villas).post(api::create_villa))
        .route(
            "/villas/{id}",
            get(api::get_villa)
                .put(api::update_villa)
                .patch(api::partial_update_villa)
                .delete(api::delete_villa),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
